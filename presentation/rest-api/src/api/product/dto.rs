use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde_json::{Map, Value};

use business::domain::product::model::Product;
use business::domain::shared::pagination::Paginated;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// False once the product has been soft-deleted
    pub available: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: product.price.to_f64(),
            name: product.name,
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PageMetaResponse {
    /// Number of available products
    pub total_products: i64,
    /// Requested page
    pub page: i64,
    /// Last page holding data; 0 when the catalog is empty
    pub last_page: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<Paginated<Product>> for ProductListResponse {
    fn from(page: Paginated<Product>) -> Self {
        let meta = PageMetaResponse {
            total_products: page.meta.total,
            page: page.meta.page,
            last_page: page.meta.last_page,
        };
        Self {
            data: page.data.into_iter().map(|p| p.into()).collect(),
            meta,
        }
    }
}

/// Collects the raw query values into the payload shape the validators expect.
pub fn pagination_payload(page: Option<String>, limit: Option<String>) -> Value {
    let mut payload = Map::new();
    if let Some(page) = page {
        payload.insert("page".to_string(), Value::String(page));
    }
    if let Some(limit) = limit {
        payload.insert("limit".to_string(), Value::String(limit));
    }
    Value::Object(payload)
}
