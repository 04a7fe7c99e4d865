//! Handler for workflow export generation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Local;
use validator::Validate;

use crate::api::dto::workflows::{GenerateWorkflowsRequest, GenerateWorkflowsResponse};
use crate::application::services::workflow_service::EMPTY_BATCH_RESULTS;
use crate::error::AppError;
use crate::state::AppState;

/// Converts per-batch links into named workflow entries dated today.
///
/// # Endpoint
///
/// `POST /api/generate-workflows`
///
/// # Request Body
///
/// ```json
/// { "batchResults": [{ "sales": "...", "marketing": "...", "it": "..." }] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "workflows": [
///     { "apollo_url": "...", "fileName": "BRAD_05-JAN-24_BATCH_1_PART_1_SALES" },
///     { "apollo_url": "...", "fileName": "BRAD_05-JAN-24_BATCH_1_PART_2_MARKETING" },
///     { "apollo_url": "...", "fileName": "BRAD_05-JAN-24_BATCH_1_PART_3_IT" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - **400**: `batchResults` missing, empty, or not an array
/// - **400**: an item without string `sales`, `marketing` and `it` (named by position)
pub async fn generate_workflows_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateWorkflowsRequest>, JsonRejection>,
) -> Result<Json<GenerateWorkflowsResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Invalid workflows request body");
        AppError::validation(EMPTY_BATCH_RESULTS)
    })?;
    payload.validate()?;

    let batches = payload.into_link_triples()?;
    let workflows = state
        .workflow_service
        .generate(&batches, Local::now().date_naive())?;

    Ok(Json(GenerateWorkflowsResponse {
        workflows: workflows.into_iter().map(Into::into).collect(),
    }))
}
