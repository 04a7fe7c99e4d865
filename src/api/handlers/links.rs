//! Handler running the whole CSV-to-links pipeline.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::links::GenerateLinksResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts domains from an uploaded CSV, resolves every batch and renders
/// segment links.
///
/// # Endpoint
///
/// `POST /api/generate-links`
///
/// # Request Body
///
/// Raw CSV with a header row containing the configured domain column.
///
/// # Response
///
/// ```json
/// {
///   "totalDomains": 12000,
///   "totalBatches": 2,
///   "batchResults": [
///     { "batch": 1, "sales": "...", "marketing": "...", "it": "..." },
///     { "batch": 2, "sales": "...", "marketing": "...", "it": "..." }
///   ]
/// }
/// ```
///
/// # Errors
///
/// CSV problems fail before any upstream call (400 or 500 by kind). When a
/// batch fails, the response status follows the error kind, `message` is
/// set, and `batchResults` keeps the batches completed before the failure.
pub async fn generate_links_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let domains = state.csv_service.domains_from_csv(body.as_ref())?;

    let run = state.batch_service.run(domains, |_| {}).await;

    let status = run
        .failure
        .as_ref()
        .map_or(StatusCode::OK, |failure| failure.error.status_code());

    Ok((status, Json(GenerateLinksResponse::from(run))).into_response())
}
