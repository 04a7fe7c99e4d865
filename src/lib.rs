//! # Apollo Batch Links
//!
//! Turns a CSV of company domains into Apollo saved searches and ready-to-use
//! deep links for three audience segments (sales, marketing, IT).
//!
//! ## Pipeline
//!
//! 1. [`application::services::CsvService`] extracts the `domain` column
//! 2. [`domain::entities::chunk_domains`] splits domains into batches of 9000
//! 3. [`infrastructure::apollo::ApolloClient`] saves each batch as a search list
//! 4. [`application::services::LinkService`] substitutes the list id into the templates
//! 5. [`application::services::BatchService`] drives steps 2-4 sequentially
//! 6. [`application::services::WorkflowService`] names the exports per segment
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, resolver trait, run outcome
//! - **Application Layer** ([`application`]) - Pipeline services
//! - **Infrastructure Layer** ([`infrastructure`]) - Apollo HTTP client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export APOLLO_API_KEY="..."
//! cargo run
//!
//! # or run the pipeline locally
//! cargo run --bin links -- run domains.csv
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BatchService, CsvService, LinkService, LinkTemplates, WorkflowService,
    };
    pub use crate::domain::batch_run::{BatchProgress, BatchRun};
    pub use crate::domain::entities::{BatchLinks, LinkTriple, SearchListId, Segment};
    pub use crate::domain::resolvers::SearchListResolver;
    pub use crate::error::AppError;
    pub use crate::infrastructure::apollo::ApolloClient;
    pub use crate::state::AppState;
}
