//! DTOs for the CSV-to-links pipeline endpoint.

use crate::domain::batch_run::BatchRun;
use crate::domain::entities::BatchLinks;
use serde::Serialize;

/// Links for one batch, tagged with its 1-based batch number.
#[derive(Debug, Serialize)]
pub struct BatchLinksItem {
    pub batch: usize,
    pub sales: String,
    pub marketing: String,
    pub it: String,
}

impl From<BatchLinks> for BatchLinksItem {
    fn from(batch: BatchLinks) -> Self {
        Self {
            batch: batch.batch,
            sales: batch.links.sales,
            marketing: batch.links.marketing,
            it: batch.links.it,
        }
    }
}

/// Outcome of a pipeline run.
///
/// On success `message` is absent. On failure it carries the error and
/// `batchResults` holds the batches completed before it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLinksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total_domains: usize,
    pub total_batches: usize,
    pub batch_results: Vec<BatchLinksItem>,
}

impl From<BatchRun> for GenerateLinksResponse {
    fn from(run: BatchRun) -> Self {
        Self {
            message: run.failure.map(|f| f.error.to_string()),
            total_domains: run.total_domains,
            total_batches: run.total_batches,
            batch_results: run.completed.into_iter().map(Into::into).collect(),
        }
    }
}
