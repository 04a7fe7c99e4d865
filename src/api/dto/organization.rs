//! DTOs for the organization search-list endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const EMPTY_DOMAINS: &str = "domains array is required and must not be empty";

/// Request to save one batch of domains as an Apollo search list.
#[derive(Debug, Deserialize, Validate)]
pub struct OrganizationIdRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "domains array is required and must not be empty"))]
    pub domains: Vec<String>,
}

/// Identifier of the saved search list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationIdResponse {
    pub search_list_id: String,
}
