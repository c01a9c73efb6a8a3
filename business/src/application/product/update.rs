use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.patch.is_empty() {
            self.logger
                .warn(&format!("Rejected empty update for product {}", params.id));
            return Err(ProductError::EmptyPatch);
        }

        let updated_product = self
            .repository
            .update(params.id, &params.patch)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.id, e));
                match e {
                    RepositoryError::NotFound => ProductError::NotFound(params.id),
                    other => ProductError::UpdateFailed {
                        id: params.id,
                        message: other.to_string(),
                    },
                }
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
