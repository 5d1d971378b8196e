//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cart::CartStoreError;

/// API-level error wrapper that maps cart errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(CartStoreError);

impl From<CartStoreError> for ApiError {
    fn from(err: CartStoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = cart_error_to_response(self.0);
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn cart_error_to_response(err: CartStoreError) -> (StatusCode, String) {
    match &err {
        CartStoreError::OutOfStock { .. } => (StatusCode::CONFLICT, err.to_string()),
        CartStoreError::ProductNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        CartStoreError::Http(_) | CartStoreError::UnexpectedStatus { .. } => {
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
        CartStoreError::Storage(_) | CartStoreError::Serialization(_) => {
            tracing::error!(error = %err, "internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
