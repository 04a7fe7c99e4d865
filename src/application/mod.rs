//! Application layer services implementing the link-generation pipeline.
//!
//! Services consume domain traits and entities and expose a small API to
//! HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::csv_service::CsvService`] - CSV parsing and domain extraction
//! - [`services::link_service::LinkService`] - Segment link template rendering
//! - [`services::batch_service::BatchService`] - Sequential batch orchestration
//! - [`services::workflow_service::WorkflowService`] - Workflow export naming

pub mod services;
