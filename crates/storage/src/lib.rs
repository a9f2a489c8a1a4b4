//! Storage Layer
//!
//! In-memory repository of the historical batch's segment
//! assignments. Assignments are recomputed at every startup from the
//! dataset and the model artifact, so nothing here persists.

mod repository;

pub use repository::{AssignmentRecord, Repository};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("repository lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("customer not found")]
    NotFound,
}
