//! Workflow export generation.

use crate::domain::entities::{LinkTriple, Segment, WorkflowEntry};
use crate::error::AppError;
use chrono::NaiveDate;

/// File-name prefix used unless configured otherwise.
pub const DEFAULT_FILE_PREFIX: &str = "BRAD";

/// Message returned when there is nothing to export.
pub const EMPTY_BATCH_RESULTS: &str = "batchResults array is required and must not be empty";

/// Builds named export descriptors from per-batch links.
pub struct WorkflowService {
    file_prefix: String,
}

impl WorkflowService {
    /// Creates a new workflow service.
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            file_prefix: file_prefix.into(),
        }
    }

    /// Emits three entries per batch in segment order (sales, marketing, IT).
    ///
    /// The position of a triple in `batches` determines its 1-based batch number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `batches` is empty.
    pub fn generate(
        &self,
        batches: &[LinkTriple],
        run_date: NaiveDate,
    ) -> Result<Vec<WorkflowEntry>, AppError> {
        if batches.is_empty() {
            return Err(AppError::validation(EMPTY_BATCH_RESULTS));
        }

        let date = format_run_date(run_date);
        let workflows = batches
            .iter()
            .enumerate()
            .flat_map(|(index, links)| {
                let date = &date;
                Segment::ALL.into_iter().map(move |segment| {
                    WorkflowEntry::new(
                        links.get(segment),
                        self.file_name_for(date, index + 1, segment),
                    )
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            batches = batches.len(),
            workflows = workflows.len(),
            "Workflows generated"
        );

        Ok(workflows)
    }

    /// Formats a file name such as `BRAD_05-JAN-24_BATCH_1_PART_1_SALES`.
    pub fn file_name(&self, run_date: NaiveDate, batch: usize, segment: Segment) -> String {
        self.file_name_for(&format_run_date(run_date), batch, segment)
    }

    fn file_name_for(&self, date: &str, batch: usize, segment: Segment) -> String {
        format!(
            "{}_{}_BATCH_{}_PART_{}_{}",
            self.file_prefix,
            date,
            batch,
            segment.part(),
            segment.label()
        )
    }
}

impl Default for WorkflowService {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PREFIX)
    }
}

/// Formats a date as `DD-MMM-YY` with an uppercase month, e.g. `05-JAN-24`.
pub fn format_run_date(date: NaiveDate) -> String {
    date.format("%d-%b-%y").to_string().to_uppercase()
}
