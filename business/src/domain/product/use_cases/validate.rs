use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

#[derive(Debug)]
pub struct ValidateProductsParams {
    pub ids: Vec<ProductId>,
}

/// Confirms every requested id names an available product.
#[async_trait]
pub trait ValidateProductsUseCase: Send + Sync {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError>;
}
