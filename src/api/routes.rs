//! API route configuration.

use crate::api::handlers::{
    generate_links_handler, generate_workflows_handler, method_not_allowed_handler,
    organization_id_handler,
};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes. Any method other than `POST` receives `405` with a JSON body.
///
/// # Endpoints
///
/// - `POST /get-organization-id` - Save one domain batch, return its list id
/// - `POST /generate-workflows`  - Build workflow export entries from batch links
/// - `POST /generate-links`      - Run the full CSV-to-links pipeline
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/get-organization-id",
            post(organization_id_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/generate-workflows",
            post(generate_workflows_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/generate-links",
            post(generate_links_handler).fallback(method_not_allowed_handler),
        )
}
