//! Versioned store domain types
//!
//! This module provides:
//! - `DeleteMarker` - Explicit live/soft-deleted entry state
//! - `Entry` - Immutable value-version with timestamps
//! - `KeyHistory` - Append-ordered entry history for one key
//! - `VersionedStore` - The key -> history mapping behind one lock
//! - `StoreError` - The single "not found" boundary condition

mod entry;
mod error;
mod history;
mod versioned_store;

pub use entry::{DeleteMarker, Entry};
pub use error::{StoreError, StoreResult};
pub use history::KeyHistory;
pub use versioned_store::VersionedStore;
