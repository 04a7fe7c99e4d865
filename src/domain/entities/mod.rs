//! Core domain entities.
//!
//! Entities are plain data structures held in memory for the duration of a
//! single run. Nothing here is persisted.
//!
//! # Entity Types
//!
//! - [`Batch`] - An ordered chunk of domains resolved as one saved search
//! - [`SearchListId`] - Identifier of a saved search returned by Apollo
//! - [`LinkTriple`] / [`BatchLinks`] - Deep links for the three [`Segment`]s
//! - [`WorkflowEntry`] - A named export descriptor for the automation tool

pub mod batch;
pub mod links;
pub mod workflow;

pub use batch::{Batch, MAX_BATCH_SIZE, chunk_domains};
pub use links::{BatchLinks, LinkTriple, SearchListId, Segment};
pub use workflow::WorkflowEntry;
