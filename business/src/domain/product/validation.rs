//! Turns untyped request payloads into use case params.
//!
//! Each function checks every rule before failing so the caller gets the
//! complete list of violations in one response.

use serde_json::Value;

use crate::domain::shared::validation::{ValidationError, coerce_number, field, positive_integer};

use super::model::{NewProduct, ProductId, ProductPatch};
use super::use_cases::create::CreateProductParams;
use super::use_cases::update::UpdateProductParams;
use super::use_cases::validate::ValidateProductsParams;
use super::value_objects::Price;

fn name_field(value: &Value, errors: &mut ValidationError) -> Option<String> {
    match value.as_str() {
        Some(name) if name.trim().is_empty() => {
            errors.push("name should not be empty");
            None
        }
        Some(name) => Some(name.to_string()),
        None => {
            errors.push("name must be a string");
            None
        }
    }
}

fn price_field(value: &Value, errors: &mut ValidationError) -> Option<Price> {
    let Some(amount) = coerce_number(value) else {
        errors.push("price must be a number");
        return None;
    };
    match Price::from_f64(amount) {
        Ok(price) => Some(price),
        Err(violations) => {
            errors.extend(violations);
            None
        }
    }
}

pub fn validate_create(payload: &Value) -> Result<CreateProductParams, ValidationError> {
    let mut errors = ValidationError::new();

    let name = match field(payload, "name") {
        Some(value) => name_field(value, &mut errors),
        None => {
            errors.push("name is required");
            None
        }
    };
    let price = match field(payload, "price") {
        Some(value) => price_field(value, &mut errors),
        None => {
            errors.push("price is required");
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) => errors.into_result(CreateProductParams {
            product: NewProduct { name, price },
        }),
        _ => Err(errors),
    }
}

/// Validates a partial update addressed to `id`.
///
/// An `id` inside the body is optional but must be a positive integer equal to
/// `id`. An empty patch passes here; the update use case rejects it.
pub fn validate_update(
    id: ProductId,
    payload: &Value,
) -> Result<UpdateProductParams, ValidationError> {
    let mut errors = ValidationError::new();

    if !payload.is_object() {
        return Err(ValidationError::single("product data must be an object"));
    }

    if let Some(value) = field(payload, "id")
        && let Some(body_id) = positive_integer("id", value, &mut errors)
        && body_id != id
    {
        errors.push(format!("id {body_id} does not match product #{id}"));
    }

    let patch = ProductPatch {
        name: field(payload, "name").and_then(|value| name_field(value, &mut errors)),
        price: field(payload, "price").and_then(|value| price_field(value, &mut errors)),
    };

    errors.into_result(UpdateProductParams { id, patch })
}

/// Validates an id taken from a request path.
pub fn validate_product_id(raw: &str) -> Result<ProductId, ValidationError> {
    let mut errors = ValidationError::new();
    let id = positive_integer("id", &Value::String(raw.to_string()), &mut errors);
    match id {
        Some(id) => errors.into_result(id),
        None => Err(errors),
    }
}

pub fn validate_product_ids(payload: &Value) -> Result<ValidateProductsParams, ValidationError> {
    let Some(items) = payload.as_array() else {
        return Err(ValidationError::single("ids must be an array"));
    };

    let mut errors = ValidationError::new();
    let ids: Vec<ProductId> = items
        .iter()
        .enumerate()
        .filter_map(|(index, value)| positive_integer(&format!("ids[{index}]"), value, &mut errors))
        .collect();

    errors.into_result(ValidateProductsParams { ids })
}
