//! Workflow entries consumed by the downstream export automation.

/// A source link paired with the file name its export should be saved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowEntry {
    pub apollo_url: String,
    pub file_name: String,
}

impl WorkflowEntry {
    pub fn new(apollo_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            apollo_url: apollo_url.into(),
            file_name: file_name.into(),
        }
    }
}
