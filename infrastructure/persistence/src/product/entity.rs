use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            Price::from_repository(self.price),
            self.available,
            self.created_at,
            self.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_map_row_into_domain_product() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 17,
            name: "USB Hub".to_string(),
            price: BigDecimal::from_str("21.5000").unwrap(),
            available: false,
            created_at: now,
            updated_at: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, 17);
        assert_eq!(product.name, "USB Hub");
        assert_eq!(product.price.amount(), &BigDecimal::from_str("21.5").unwrap());
        assert!(!product.available);
        assert_eq!(product.created_at, now);
    }
}
