//! KeyHistory - Ordered entry history for one key
//!
//! - Entries are kept in append order; index 0 is the oldest
//! - Entries are never reordered and never removed individually
//! - `clear` empties the sequence but the key's slot in the store survives
//!
//! This is a container. The put/get/delete semantics live in the store.

use chrono::{DateTime, Utc};

use super::Entry;

/// The complete append-ordered history of a single key.
#[derive(Clone, Debug)]
pub struct KeyHistory {
    /// The key this history belongs to.
    key: String,
    /// All entries for the key, oldest first.
    entries: Vec<Entry>,
}

impl KeyHistory {
    /// Creates a new empty history for the given key.
    pub fn new(key: String) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in append order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the most recently appended entry, if any.
    #[inline]
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Retires the most recently appended entry if it is live.
    ///
    /// Returns true if a marker was stamped. A history whose latest entry is
    /// already retired, or an empty history, is left untouched.
    pub fn retire_latest(&mut self, at: DateTime<Utc>) -> bool {
        match self.entries.last_mut() {
            Some(latest) => latest.retire(at),
            None => false,
        }
    }

    /// Empties the history. The key itself is unaffected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
