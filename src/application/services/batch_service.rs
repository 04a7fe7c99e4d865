//! Sequential batch orchestration.

use crate::application::services::LinkService;
use crate::domain::batch_run::{BatchFailure, BatchProgress, BatchRun};
use crate::domain::entities::{Batch, BatchLinks, chunk_domains};
use crate::domain::resolvers::SearchListResolver;
use std::sync::Arc;

/// Drives batching, resolution and link rendering for a whole domain list.
///
/// Batches are visited strictly in order with a single upstream request in
/// flight. The first failure stops the run; batches completed before it are
/// kept in the returned [`BatchRun`].
pub struct BatchService<R: SearchListResolver + ?Sized> {
    resolver: Arc<R>,
    link_service: Arc<LinkService>,
    batch_size: usize,
}

impl<R: SearchListResolver + ?Sized> BatchService<R> {
    /// Creates a new batch service.
    pub fn new(resolver: Arc<R>, link_service: Arc<LinkService>, batch_size: usize) -> Self {
        Self {
            resolver,
            link_service,
            batch_size,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Splits `domains` into batches and processes them.
    ///
    /// `on_progress` receives a [`BatchProgress::Started`] notification, one
    /// [`BatchProgress::Processing`] per attempted batch, and
    /// [`BatchProgress::Completed`] if every batch succeeds.
    pub async fn run<F>(&self, domains: Vec<String>, mut on_progress: F) -> BatchRun
    where
        F: FnMut(&BatchProgress) + Send,
    {
        let total_domains = domains.len();
        let batches = chunk_domains(domains, self.batch_size);

        report(
            &mut on_progress,
            BatchProgress::Started {
                domains: total_domains,
                batches: batches.len(),
            },
        );

        let mut run = self.run_batches(&batches, &mut on_progress).await;
        run.total_domains = total_domains;
        run
    }

    /// Processes already-built batches in order.
    pub async fn run_batches<F>(&self, batches: &[Batch], mut on_progress: F) -> BatchRun
    where
        F: FnMut(&BatchProgress) + Send,
    {
        let total = batches.len();
        let mut run = BatchRun {
            total_domains: batches.iter().map(Batch::len).sum(),
            total_batches: total,
            completed: Vec::with_capacity(total),
            failure: None,
        };

        for (index, batch) in batches.iter().enumerate() {
            let number = index + 1;
            report(
                &mut on_progress,
                BatchProgress::Processing {
                    batch: number,
                    total,
                },
            );

            match self.resolver.resolve(&batch.domains).await {
                Ok(list_id) => {
                    let links = self.link_service.render(&list_id);
                    metrics::counter!("batches_processed_total").increment(1);
                    tracing::debug!(batch = number, list_id = %list_id, "Batch resolved");
                    run.completed.push(BatchLinks {
                        batch: number,
                        links,
                    });
                }
                Err(error) => {
                    tracing::error!(
                        batch = number,
                        total,
                        completed = run.completed.len(),
                        error = %error,
                        "Batch failed, stopping run"
                    );
                    run.failure = Some(BatchFailure {
                        batch: number,
                        error,
                    });
                    return run;
                }
            }
        }

        report(&mut on_progress, BatchProgress::Completed { batches: total });
        run
    }
}

fn report<F: FnMut(&BatchProgress)>(on_progress: &mut F, progress: BatchProgress) {
    tracing::info!("{progress}");
    on_progress(&progress);
}
