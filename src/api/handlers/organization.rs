//! Handler for saving a domain batch as an Apollo search list.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::organization::{EMPTY_DOMAINS, OrganizationIdRequest, OrganizationIdResponse};
use crate::error::AppError;
use crate::infrastructure::apollo::MISSING_API_KEY;
use crate::state::AppState;

/// Resolves one batch of domains into an Apollo search list identifier.
///
/// # Endpoint
///
/// `POST /api/get-organization-id`
///
/// # Request Body
///
/// ```json
/// { "domains": ["acme.com", "globex.com"] }
/// ```
///
/// # Response
///
/// ```json
/// { "searchListId": "65a1f0c2e4b0" }
/// ```
///
/// # Errors
///
/// - **500**: API key not configured (checked before the body is read)
/// - **400**: `domains` missing, empty, or not an array of strings
/// - **500**: Apollo failed or returned no `listId`
pub async fn organization_id_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrganizationIdRequest>, JsonRejection>,
) -> Result<Json<OrganizationIdResponse>, AppError> {
    if !state.resolver.is_configured() {
        return Err(AppError::configuration(MISSING_API_KEY));
    }

    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Invalid organization id request body");
        AppError::data(EMPTY_DOMAINS)
    })?;
    payload.validate()?;

    let list_id = state.resolver.resolve(&payload.domains).await?;

    Ok(Json(OrganizationIdResponse {
        search_list_id: list_id.into_inner(),
    }))
}
