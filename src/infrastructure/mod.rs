//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`apollo`] - HTTP client for the Apollo `save_query` endpoint

pub mod apollo;
