use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};

pub struct ValidateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidateProductsUseCase for ValidateProductsUseCaseImpl {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError> {
        let mut ids = params.ids;
        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(*id));

        self.logger
            .info(&format!("Validating {} distinct products", ids.len()));

        let products = self
            .repository
            .find_available_by_ids(&ids)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to validate products: {}", e));
                ProductError::Repository(e)
            })?;

        if products.len() != ids.len() {
            self.logger.warn(&format!(
                "Only {} of {} requested products are available",
                products.len(),
                ids.len()
            ));
            return Err(ProductError::Unavailable);
        }

        Ok(products)
    }
}
