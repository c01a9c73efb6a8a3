use crate::domain::errors::RepositoryError;
use crate::domain::shared::validation::ValidationError;

use super::model::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Product data is required")]
    EmptyPatch,
    #[error("Product with id #{0} not found")]
    NotFound(ProductId),
    #[error("Some products are not available")]
    Unavailable,
    #[error("Product with id #{id} could not be updated: {message}")]
    UpdateFailed { id: ProductId, message: String },
    #[error("Product with id #{id} could not be deleted: {message}")]
    DeleteFailed { id: ProductId, message: String },
    #[error("Product repository failure: {0}")]
    Repository(#[from] RepositoryError),
}
