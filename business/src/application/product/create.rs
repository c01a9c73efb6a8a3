use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.product.name));

        let product = self
            .repository
            .create(&params.product)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to create product: {}", e));
                ProductError::Repository(e)
            })?;

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
