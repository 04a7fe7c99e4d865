//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Apollo credentials configured
/// - **503 Service Unavailable**: Apollo API key missing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "apollo": { "status": "ok", "message": "API key configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let apollo_check = check_apollo(&state);
    let healthy = apollo_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            apollo: apollo_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports whether the resolver holds an API key. Does not call Apollo.
fn check_apollo(state: &AppState) -> CheckStatus {
    if state.resolver.is_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("API key configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("API Key is not configured.".to_string()),
        }
    }
}
