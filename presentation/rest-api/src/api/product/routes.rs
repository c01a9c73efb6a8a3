use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use serde_json::Value;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::soft_delete::{
    SoftDeleteProductParams, SoftDeleteProductUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::use_cases::validate::ValidateProductsUseCase;
use business::domain::product::validation::{
    validate_create, validate_product_id, validate_product_ids, validate_update,
};
use business::domain::shared::pagination::Pagination;
use business::domain::shared::validation::ValidationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductListResponse, ProductResponse, pagination_payload};
use crate::api::tags::ApiTags;

fn invalid(error: ValidationError) -> Json<ErrorResponse> {
    ProductError::Validation(error).into_error_response().1
}

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    soft_delete_use_case: Arc<dyn SoftDeleteProductUseCase>,
    validate_use_case: Arc<dyn ValidateProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        soft_delete_use_case: Arc<dyn SoftDeleteProductUseCase>,
        validate_use_case: Arc<dyn ValidateProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            soft_delete_use_case,
            validate_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, listing, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Body: `{ "name": string, "price": number }`. The price must be
    /// non-negative with at most 4 decimal places.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<Value>) -> CreateProductResponse {
        let params = match validate_create(&body.0) {
            Ok(params) => params,
            Err(err) => return CreateProductResponse::BadRequest(invalid(err)),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List available products
    ///
    /// Pages through products that have not been soft-deleted.
    /// `page` defaults to 1 and `limit` to 10. Pages past the last one
    /// return an empty `data` array.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let pagination = match Pagination::from_payload(&pagination_payload(page.0, limit.0)) {
            Ok(pagination) => pagination,
            Err(err) => return GetAllProductsResponse::BadRequest(invalid(err)),
        };

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { pagination })
            .await
        {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Soft-deleted products are reported as not found.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match validate_product_id(&id.0) {
            Ok(id) => id,
            Err(err) => return GetProductByIdResponse::BadRequest(invalid(err)),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Partial update: send any of `name` and `price`. An optional `id` in the
    /// body must match the path. An empty patch is rejected.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<String>, body: Json<Value>) -> UpdateProductResponse {
        let params = match validate_product_id(&id.0).and_then(|id| validate_update(id, &body.0)) {
            Ok(params) => params,
            Err(err) => return UpdateProductResponse::BadRequest(invalid(err)),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product and returns it.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match validate_product_id(&id.0) {
            Ok(id) => id,
            Err(err) => return DeleteProductResponse::BadRequest(invalid(err)),
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Soft-delete a product
    ///
    /// Marks the product unavailable. It is kept in storage but hidden from
    /// listing, lookup, and validation.
    #[oai(
        path = "/products/:id/soft-delete",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn soft_delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match validate_product_id(&id.0) {
            Ok(id) => id,
            Err(err) => return DeleteProductResponse::BadRequest(invalid(err)),
        };

        match self
            .soft_delete_use_case
            .execute(SoftDeleteProductParams { id })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Validate product ids
    ///
    /// Body: JSON array of product ids. Duplicates are ignored. Fails with 400
    /// when any id does not name an available product.
    #[oai(path = "/products/validate", method = "post", tag = "ApiTags::Products")]
    async fn validate_products(&self, body: Json<Value>) -> ValidateProductsResponse {
        let params = match validate_product_ids(&body.0) {
            Ok(params) => params,
            Err(err) => return ValidateProductsResponse::BadRequest(invalid(err)),
        };

        match self.validate_use_case.execute(params).await {
            Ok(products) => ValidateProductsResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ValidateProductsResponse::BadRequest(json),
                    _ => ValidateProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ValidateProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
