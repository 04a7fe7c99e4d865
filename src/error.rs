//! Application error type and its HTTP representation.
//!
//! Every failure carries a single user-facing message. The kind only decides
//! the HTTP status; no structured code crosses the HTTP boundary.
//!
//! # Response Format
//!
//! ```json
//! { "message": "API Key is not configured." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid configuration (API key, CSV header layout).
    #[error("{0}")]
    Configuration(String),

    /// Input data that cannot be processed (no domains, unreadable CSV).
    #[error("{0}")]
    Data(String),

    /// Request payload that failed validation.
    #[error("{0}")]
    Validation(String),

    /// Non-success or malformed response from Apollo.
    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::Data(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// HTTP status used when this error reaches a handler boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Data(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(m) | Self::Data(m) | Self::Validation(m) | Self::Upstream(m) => m,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

/// Uses the first field message declared on the DTO, falling back to the
/// validator's own rendering.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        Self::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "items must not be empty"))]
        items: Vec<String>,
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::configuration("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::upstream("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::data("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::configuration("API Key is not configured.");
        assert_eq!(err.to_string(), "API Key is not configured.");
        assert_eq!(err.message(), "API Key is not configured.");
    }

    #[test]
    fn test_from_validation_errors_uses_field_message() {
        let payload = Payload { items: vec![] };
        let err: AppError = payload.validate().unwrap_err().into();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.message(), "items must not be empty");
    }
}
