use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// HTTP status code, repeated for clients that only see the body
    pub status: u16,
    /// Error kind, e.g. `ValidationError` or `NotFound`
    pub name: String,
    /// Human-readable description
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
