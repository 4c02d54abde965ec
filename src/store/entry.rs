//! Entry - Immutable value-version for a key
//!
//! An entry is one historical value of a key:
//! - Has the value payload and the timestamp the store appended it
//! - Carries an explicit soft-delete marker, set at most once
//! - Never mutated after creation except for the single retire transition
//!
//! The marker is an explicit sum type, NOT an `Option<DateTime>`, so that
//! "live" and "retired" are distinct states by construction.

use chrono::{DateTime, Utc};

/// The soft-delete state of an entry.
///
/// `Deleted` records when the entry was retired. Once an entry is
/// `Deleted` it never becomes `Live` again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteMarker {
    /// The entry is the current value of its key.
    Live,
    /// The entry was soft-deleted at the given instant.
    Deleted(DateTime<Utc>),
}

impl DeleteMarker {
    /// Returns true if this marker is `Live`.
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, DeleteMarker::Live)
    }
}

/// A single immutable value-version of a key.
///
/// All fields are private. The only state transition after construction is
/// `retire`, which stamps the delete marker exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The value payload.
    value: String,
    /// When the store appended this entry. Stamped by the store, never
    /// caller-supplied.
    entered_at: DateTime<Utc>,
    /// Soft-delete state.
    marker: DeleteMarker,
}

impl Entry {
    /// Creates a new live entry.
    pub fn new(value: String, entered_at: DateTime<Utc>) -> Self {
        Self {
            value,
            entered_at,
            marker: DeleteMarker::Live,
        }
    }

    /// Returns the value payload.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns when the store appended this entry.
    #[inline]
    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    /// Returns the soft-delete marker.
    #[inline]
    pub fn marker(&self) -> DeleteMarker {
        self.marker
    }

    /// Returns true if this entry has not been soft-deleted.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.marker.is_live()
    }

    /// Returns the soft-delete instant, if the entry has been retired.
    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self.marker {
            DeleteMarker::Live => None,
            DeleteMarker::Deleted(at) => Some(at),
        }
    }

    /// Stamps the delete marker.
    ///
    /// Returns true if the entry was live and is now retired. A retired
    /// entry keeps its original delete timestamp; re-retiring is a no-op.
    pub fn retire(&mut self, at: DateTime<Utc>) -> bool {
        match self.marker {
            DeleteMarker::Live => {
                self.marker = DeleteMarker::Deleted(at);
                true
            }
            DeleteMarker::Deleted(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_entry_is_live() {
        let entry = Entry::new("v1".to_string(), ts(100));

        assert_eq!(entry.value(), "v1");
        assert_eq!(entry.entered_at(), ts(100));
        assert!(entry.is_live());
        assert_eq!(entry.deleted_at(), None);
    }

    #[test]
    fn test_retire_stamps_marker_once() {
        let mut entry = Entry::new("v1".to_string(), ts(100));

        assert!(entry.retire(ts(200)));
        assert!(!entry.is_live());
        assert_eq!(entry.deleted_at(), Some(ts(200)));

        // Second retire keeps the original stamp
        assert!(!entry.retire(ts(300)));
        assert_eq!(entry.deleted_at(), Some(ts(200)));
    }

    #[test]
    fn test_marker_is_explicit_sum_type() {
        let live = DeleteMarker::Live;
        let deleted = DeleteMarker::Deleted(ts(1));

        assert!(live.is_live());
        assert!(!deleted.is_live());
    }

    #[test]
    fn test_entry_clone_equality() {
        let e1 = Entry::new("v".to_string(), ts(5));
        let e2 = e1.clone();

        assert_eq!(e1, e2);
    }
}
