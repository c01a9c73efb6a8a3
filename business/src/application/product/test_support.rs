//! Doubles shared by the product use case tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, ProductId, ProductPatch};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn count_available(&self) -> Result<i64, RepositoryError>;
        async fn find_available(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError>;
        async fn get_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn find_available_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, RepositoryError>;
        async fn mark_unavailable(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: ProductId, name: &str, price: &str, available: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        name.to_string(),
        price.parse().unwrap(),
        available,
        now,
        now,
    )
}

/// Vec-backed repository with the same filtering rules as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            rows: Mutex::new(products),
        }
    }

    fn available(&self) -> Vec<Product> {
        let mut rows: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.available)
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        rows
    }

    fn modify(
        &self,
        id: ProductId,
        change: impl FnOnce(&mut Product),
    ) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        change(row);
        Ok(row.clone())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count_available(&self) -> Result<i64, RepositoryError> {
        Ok(self.available().len() as i64)
    }

    async fn find_available(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .available()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.available()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_available_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .available()
            .into_iter()
            .filter(|p| ids.contains(&p.id))
            .collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let created = Product::from_repository(
            id,
            product.name.clone(),
            product.price.clone(),
            true,
            now,
            now,
        );
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        self.modify(id, |product| product.apply(patch))
    }

    async fn mark_unavailable(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.modify(id, |product| {
            product.available = false;
            product.updated_at = Utc::now();
        })
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let index = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(rows.remove(index))
    }
}
