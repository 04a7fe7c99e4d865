//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod links;
pub mod organization;
pub mod workflows;

pub use fallback::method_not_allowed_handler;
pub use health::health_handler;
pub use links::generate_links_handler;
pub use organization::organization_id_handler;
pub use workflows::generate_workflows_handler;
