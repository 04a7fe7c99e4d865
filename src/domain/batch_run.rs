//! Outcome and progress model of a sequential batch run.

use crate::domain::entities::BatchLinks;
use crate::error::AppError;
use std::fmt;

/// Progress notifications emitted while a run advances.
///
/// The `Display` form is the human-readable status line shown to operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchProgress {
    Started { domains: usize, batches: usize },
    Processing { batch: usize, total: usize },
    Completed { batches: usize },
}

impl fmt::Display for BatchProgress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Started { domains, batches } => write!(
                f,
                "Found {domains} domains. Processing in {batches} batches..."
            ),
            Self::Processing { batch, total } => {
                write!(f, "Processing batch {batch} of {total}...")
            }
            Self::Completed { .. } => f.write_str("Processing complete!"),
        }
    }
}

/// The batch that stopped a run and why.
#[derive(Debug)]
pub struct BatchFailure {
    pub batch: usize,
    pub error: AppError,
}

/// Result of a run: every batch completed before the first failure, plus that
/// failure if there was one.
///
/// A run never continues past a failure, so `completed` always holds a prefix
/// of the batches in order.
#[derive(Debug)]
pub struct BatchRun {
    pub total_domains: usize,
    pub total_batches: usize,
    pub completed: Vec<BatchLinks>,
    pub failure: Option<BatchFailure>,
}

impl BatchRun {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Collapses the run into a plain result, dropping partial links on failure.
    pub fn into_result(self) -> Result<Vec<BatchLinks>, AppError> {
        match self.failure {
            Some(failure) => Err(failure.error),
            None => Ok(self.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkTriple;

    fn links(batch: usize) -> BatchLinks {
        BatchLinks {
            batch,
            links: LinkTriple {
                sales: format!("s{batch}"),
                marketing: format!("m{batch}"),
                it: format!("i{batch}"),
            },
        }
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            BatchProgress::Started {
                domains: 12,
                batches: 2
            }
            .to_string(),
            "Found 12 domains. Processing in 2 batches..."
        );
        assert_eq!(
            BatchProgress::Processing { batch: 1, total: 2 }.to_string(),
            "Processing batch 1 of 2..."
        );
        assert_eq!(
            BatchProgress::Completed { batches: 2 }.to_string(),
            "Processing complete!"
        );
    }

    #[test]
    fn test_into_result_success() {
        let run = BatchRun {
            total_domains: 2,
            total_batches: 2,
            completed: vec![links(1), links(2)],
            failure: None,
        };

        assert!(run.is_complete());
        assert_eq!(run.into_result().unwrap().len(), 2);
    }

    #[test]
    fn test_into_result_failure_drops_partial() {
        let run = BatchRun {
            total_domains: 3,
            total_batches: 3,
            completed: vec![links(1)],
            failure: Some(BatchFailure {
                batch: 2,
                error: AppError::upstream("Apollo returned a 500 status."),
            }),
        };

        assert!(!run.is_complete());
        let err = run.into_result().unwrap_err();
        assert_eq!(err.message(), "Apollo returned a 500 status.");
    }
}
