//! Shared application state injected into all handlers.

use crate::application::services::{BatchService, CsvService, LinkService, WorkflowService};
use crate::config::Config;
use crate::domain::resolvers::SearchListResolver;
use std::sync::Arc;

/// Services shared across requests. Cheap to clone; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn SearchListResolver>,
    pub batch_service: Arc<BatchService<dyn SearchListResolver>>,
    pub csv_service: Arc<CsvService>,
    pub workflow_service: Arc<WorkflowService>,
}

impl AppState {
    /// Wires services from configuration around the given resolver.
    pub fn new(config: &Config, resolver: Arc<dyn SearchListResolver>) -> Self {
        let link_service = Arc::new(LinkService::new(
            config.templates.clone(),
            config.placeholder.clone(),
        ));

        let batch_service = Arc::new(BatchService::new(
            resolver.clone(),
            link_service,
            config.batch_size,
        ));

        Self {
            resolver,
            batch_service,
            csv_service: Arc::new(CsvService::new(config.domain_column.clone())),
            workflow_service: Arc::new(WorkflowService::new(
                config.workflow_file_prefix.clone(),
            )),
        }
    }
}
