use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductId, ProductPatch};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `RowNotFound` is the only driver error that means "no such product".
fn repository_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        other => RepositoryError::database_error(other.to_string()),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn count_available(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE available = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn find_available(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE available = TRUE ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE id = $1 AND available = TRUE",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn find_available_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE id = ANY($1) AND available = TRUE",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, available, created_at, updated_at"#,
        )
        .bind(&product.name)
        .bind(product.price.amount())
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, available, created_at, updated_at"#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.price.as_ref().map(|p| p.amount()))
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn mark_unavailable(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET available = FALSE, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, available, created_at, updated_at"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, price, available, created_at, updated_at",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_translate_row_not_found() {
        assert_eq!(
            repository_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn should_keep_message_of_other_driver_errors() {
        let error = repository_error(sqlx::Error::PoolTimedOut);

        match error {
            RepositoryError::DatabaseError(message) => {
                assert_eq!(message, sqlx::Error::PoolTimedOut.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
