//! Business logic services for the application layer.

pub mod batch_service;
pub mod csv_service;
pub mod link_service;
pub mod workflow_service;

pub use batch_service::BatchService;
pub use csv_service::CsvService;
pub use link_service::{LinkService, LinkTemplates};
pub use workflow_service::WorkflowService;
