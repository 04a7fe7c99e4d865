//! Fallback for unsupported methods on API routes.

use axum::{Json, http::StatusCode};

use crate::error::ErrorBody;

/// Responds `405` with the standard error body.
pub async fn method_not_allowed_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            message: "Method Not Allowed".to_string(),
        }),
    )
}
