//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Batches, segments, links and workflow entries
//! - [`resolvers`] - Trait for resolving a batch into a saved search list
//! - [`batch_run`] - Progress and outcome of a sequential batch run
//!
//! # Processing Flow
//!
//! 1. Domains are split into [`entities::Batch`]es
//! 2. Each batch is resolved via [`resolvers::SearchListResolver`]
//! 3. The list identifier is substituted into the segment link templates
//! 4. Results accumulate in a [`batch_run::BatchRun`] until done or the first failure

pub mod batch_run;
pub mod entities;
pub mod resolvers;
