//! DTOs for the workflow export endpoint.

use crate::domain::entities::{LinkTriple, WorkflowEntry};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Links for one batch as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResultItem {
    pub sales: String,
    pub marketing: String,
    pub it: String,
}

impl From<LinkTriple> for BatchResultItem {
    fn from(links: LinkTriple) -> Self {
        Self {
            sales: links.sales,
            marketing: links.marketing,
            it: links.it,
        }
    }
}

impl From<BatchResultItem> for LinkTriple {
    fn from(item: BatchResultItem) -> Self {
        Self {
            sales: item.sales,
            marketing: item.marketing,
            it: item.it,
        }
    }
}

/// Request to turn per-batch links into named workflow entries.
///
/// Items stay raw until [`GenerateWorkflowsRequest::into_link_triples`] so a
/// malformed entry can be reported by position.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkflowsRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "batchResults array is required and must not be empty"
    ))]
    pub batch_results: Vec<Value>,
}

impl GenerateWorkflowsRequest {
    /// Parses every item into links, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first item (1-based) that is
    /// not an object with string `sales`, `marketing` and `it`.
    pub fn into_link_triples(self) -> Result<Vec<LinkTriple>, AppError> {
        self.batch_results
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<BatchResultItem>(item)
                    .map(LinkTriple::from)
                    .map_err(|_| AppError::validation(malformed_item(index + 1)))
            })
            .collect()
    }
}

pub fn malformed_item(number: usize) -> String {
    format!("batchResults item {number} must have string 'sales', 'marketing' and 'it' links.")
}

/// A single export descriptor.
///
/// Field names follow the automation tool's contract: `apollo_url` and `fileName`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowItem {
    pub apollo_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl From<WorkflowEntry> for WorkflowItem {
    fn from(entry: WorkflowEntry) -> Self {
        Self {
            apollo_url: entry.apollo_url,
            file_name: entry.file_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateWorkflowsResponse {
    pub workflows: Vec<WorkflowItem>,
}
