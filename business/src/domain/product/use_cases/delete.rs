use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

#[derive(Debug)]
pub struct DeleteProductParams {
    pub id: ProductId,
}

/// Permanently removes the row and returns it as it was before deletion.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
