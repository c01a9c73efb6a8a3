use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

#[derive(Debug)]
pub struct SoftDeleteProductParams {
    pub id: ProductId,
}

/// Marks the row unavailable. It stays in storage but leaves every filtered query.
#[async_trait]
pub trait SoftDeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: SoftDeleteProductParams) -> Result<Product, ProductError>;
}
