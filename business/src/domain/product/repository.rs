use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductId, ProductPatch};

/// Data-access port over the products table.
///
/// Methods named `*_available` only see rows with `available = true`.
/// Mutations address rows by id regardless of availability and return
/// `RepositoryError::NotFound` when no row matched.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn count_available(&self) -> Result<i64, RepositoryError>;
    async fn find_available(&self, offset: i64, limit: i64)
    -> Result<Vec<Product>, RepositoryError>;
    async fn get_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn find_available_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Unfiltered lookup, soft-deleted rows included.
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, id: ProductId, patch: &ProductPatch)
    -> Result<Product, RepositoryError>;
    async fn mark_unavailable(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;
}
