use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::Validation(_) | ProductError::EmptyPatch => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Unavailable => (StatusCode::BAD_REQUEST, "BadRequest"),
            ProductError::UpdateFailed { .. }
            | ProductError::DeleteFailed { .. }
            | ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                status: status.as_u16(),
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
