use chrono::{DateTime, Utc};

use super::value_objects::Price;

pub type ProductId = i64;

/// A catalog entry. `available == false` marks a soft-deleted row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: Price,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            available,
            created_at,
            updated_at,
        }
    }

    /// Applies the fields present in `patch` and bumps `updated_at`, mirroring the SQL update.
    #[cfg(test)]
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = &patch.price {
            self.price = price.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for a row that does not exist yet; the datastore assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        let now = Utc::now();
        Product::from_repository(
            7,
            "Keyboard".to_string(),
            "49.90".parse().unwrap(),
            true,
            now,
            now,
        )
    }

    #[test]
    fn should_detect_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        assert!(
            !ProductPatch {
                name: Some("Mouse".to_string()),
                price: None,
            }
            .is_empty()
        );
    }

    #[test]
    fn should_only_change_present_fields() {
        let mut product = product();
        product.apply(&ProductPatch {
            name: None,
            price: Some("39.90".parse().unwrap()),
        });

        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price.to_string(), "39.90");
        assert!(product.available);
    }
}
