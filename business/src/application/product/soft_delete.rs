use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::soft_delete::{
    SoftDeleteProductParams, SoftDeleteProductUseCase,
};

pub struct SoftDeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SoftDeleteProductUseCase for SoftDeleteProductUseCaseImpl {
    async fn execute(&self, params: SoftDeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Marking product unavailable: {}", params.id));

        let product = self
            .repository
            .mark_unavailable(params.id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to mark product {} unavailable: {}",
                    params.id, e
                ));
                match e {
                    RepositoryError::NotFound => ProductError::NotFound(params.id),
                    other => ProductError::DeleteFailed {
                        id: params.id,
                        message: other.to_string(),
                    },
                }
            })?;

        self.logger
            .info(&format!("Product marked unavailable: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::get_all::GetAllProductsUseCaseImpl;
    use crate::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use crate::application::product::test_support::{
        InMemoryProductRepository, MockProductRepo, make_product, mock_logger,
    };
    use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
    use crate::domain::product::use_cases::get_by_id::{
        GetProductByIdParams, GetProductByIdUseCase,
    };
    use crate::domain::shared::pagination::Pagination;

    #[tokio::test]
    async fn should_return_product_flagged_unavailable() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_mark_unavailable()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|id| Ok(make_product(id, "Headset", "70.00", false)));

        let use_case = SoftDeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(SoftDeleteProductParams { id: 4 })
            .await
            .unwrap();

        assert!(!product.available);
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_mark_unavailable()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SoftDeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(SoftDeleteProductParams { id: 77 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound(77)));
    }

    #[tokio::test]
    async fn should_wrap_other_failures_as_delete_failed() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_mark_unavailable()
            .returning(|_| Err(RepositoryError::database_error("read-only transaction")));

        let use_case = SoftDeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(SoftDeleteProductParams { id: 9 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::DeleteFailed { id: 9, .. }));
    }

    #[tokio::test]
    async fn should_hide_row_from_queries_but_keep_it_stored() {
        let repository: Arc<dyn ProductRepository> =
            Arc::new(InMemoryProductRepository::with_products(vec![
                make_product(1, "Speaker", "45.00", true),
                make_product(2, "Subwoofer", "150.00", true),
            ]));
        let soft_delete = SoftDeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let find = GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let list = GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        soft_delete
            .execute(SoftDeleteProductParams { id: 1 })
            .await
            .unwrap();

        assert!(matches!(
            find.execute(GetProductByIdParams { id: 1 }).await,
            Err(ProductError::NotFound(1))
        ));

        let page = list
            .execute(GetAllProductsParams {
                pagination: Pagination::default(),
            })
            .await
            .unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0].id, 2);

        let stored = repository.get_by_id(1).await.unwrap();
        assert!(!stored.available);
        assert_eq!(stored.name, "Speaker");
    }
}
