use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Paginated;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Paginated<Product>, ProductError> {
        let pagination = params.pagination;
        self.logger.info(&format!(
            "Fetching available products: page {}, limit {}",
            pagination.page(),
            pagination.limit()
        ));

        let total = self.repository.count_available().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to count products: {}", e));
            ProductError::Repository(e)
        })?;

        let products = self
            .repository
            .find_available(pagination.offset(), pagination.limit())
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to fetch products: {}", e));
                ProductError::Repository(e)
            })?;

        self.logger.info(&format!(
            "Found {} of {} available products",
            products.len(),
            total
        ));
        Ok(Paginated::new(products, total, pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        InMemoryProductRepository, MockProductRepo, make_product, mock_logger,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::pagination::Pagination;
    use proptest::prelude::*;

    fn params(page: i64, limit: i64) -> GetAllProductsParams {
        GetAllProductsParams {
            pagination: Pagination::new(page, limit).unwrap(),
        }
    }

    fn catalog(available: usize, unavailable: usize) -> InMemoryProductRepository {
        let mut products = Vec::new();
        for i in 0..(available + unavailable) {
            let id = i as i64 + 1;
            products.push(make_product(id, &format!("Item {id}"), "1.00", i < available));
        }
        InMemoryProductRepository::with_products(products)
    }

    #[tokio::test]
    async fn should_request_window_from_page_and_limit() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count_available().returning(|| Ok(25));
        mock_repo
            .expect_find_available()
            .withf(|offset, limit| *offset == 10 && *limit == 10)
            .times(1)
            .returning(|_, _| Ok(vec![make_product(11, "Monitor", "199.99", true)]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case.execute(params(2, 10)).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.last_page, 3);
    }

    #[tokio::test]
    async fn should_return_empty_data_past_last_page() {
        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(catalog(5, 0)),
            logger: mock_logger(),
        };

        let page = use_case.execute(params(4, 2)).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.page, 4);
        assert_eq!(page.meta.last_page, 3);
    }

    #[tokio::test]
    async fn should_exclude_unavailable_products() {
        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(catalog(3, 4)),
            logger: mock_logger(),
        };

        let page = use_case.execute(params(1, 10)).await.unwrap();

        assert_eq!(page.meta.total, 3);
        assert!(page.data.iter().all(|p| p.available));
    }

    #[tokio::test]
    async fn should_fail_when_count_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count_available()
            .returning(|| Err(RepositoryError::database_error("timeout")));
        mock_repo.expect_find_available().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1, 10)).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn page_never_exceeds_limit_and_last_page_is_ceiling(
            available in 0usize..40,
            unavailable in 0usize..10,
            page in 1i64..8,
            limit in 1i64..12,
        ) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let use_case = GetAllProductsUseCaseImpl {
                repository: Arc::new(catalog(available, unavailable)),
                logger: mock_logger(),
            };

            let result = runtime.block_on(use_case.execute(params(page, limit))).unwrap();

            let expected_last = (available as f64 / limit as f64).ceil() as i64;
            prop_assert_eq!(result.meta.last_page, expected_last);
            prop_assert_eq!(result.meta.total, available as i64);
            prop_assert!(result.data.len() as i64 <= limit);
            if page > expected_last {
                prop_assert!(result.data.is_empty());
            }
        }
    }
}
