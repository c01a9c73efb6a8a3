use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_available_by_id(params.id)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to fetch product {}: {}", params.id, e));
                match e {
                    RepositoryError::NotFound => ProductError::NotFound(params.id),
                    other => ProductError::Repository(other),
                }
            })?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        InMemoryProductRepository, MockProductRepo, make_product, mock_logger,
    };

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_available_by_id()
            .withf(|id| *id == 3)
            .returning(|id| Ok(make_product(id, "Webcam", "59.00", true)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Webcam");
    }

    #[tokio::test]
    async fn should_return_not_found_with_id_in_message() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_available_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(GetProductByIdParams { id: 981 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound(981)));
        assert_eq!(error.to_string(), "Product with id #981 not found");
    }

    #[tokio::test]
    async fn should_hide_soft_deleted_product() {
        let repository = InMemoryProductRepository::with_products(vec![make_product(
            5, "Retired Mouse", "9.99", false,
        )]);
        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(GetProductByIdParams { id: 5 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound(5)));
    }

    #[tokio::test]
    async fn should_keep_other_failures_internal() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_available_by_id()
            .returning(|_| Err(RepositoryError::database_error("pool timed out")));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(GetProductByIdParams { id: 1 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::Repository(_)));
    }
}
