//! Store boundary errors
//!
//! The store surfaces exactly one condition: "not found". Input validation
//! is the transport adapter's job; the store never sees malformed input.

use thiserror::Error;

/// Result type for store reads.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the versioned store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key is absent, its history is empty, or its current value is
    /// soft-deleted.
    #[error("no value")]
    NotFound,
}
