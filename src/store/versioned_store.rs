//! VersionedStore - Key-value store with full write history
//!
//! Owns the key -> history mapping behind one coarse mutex. Rules:
//! - Put retires the previous latest live entry, then appends a new live
//!   one ("retire-before-append"); at most one live entry per key, always
//!   the last appended
//! - Get returns the latest entry's value only while that entry is live
//! - Delete soft-deletes the latest entry; DeleteAll empties the history
//!   but the key's slot is never removed once created
//!
//! Only timestamp capture and map mutation happen under the lock. History
//! reads clone the entries out, so callers never alias store internals.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use super::{Entry, KeyHistory, StoreError, StoreResult};

/// In-memory versioned key-value store.
///
/// Constructed once at process start and shared by reference across request
/// handlers. All operations are safe to call concurrently.
#[derive(Debug, Default)]
pub struct VersionedStore {
    data: Mutex<HashMap<String, KeyHistory>>,
}

impl VersionedStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a new value-version for `key`, retiring the previous latest
    /// entry first.
    ///
    /// One timestamp is captured per call and used for both the retirement
    /// stamp and the new entry, so a retired entry and its successor always
    /// carry orderable timestamps. Returns a copy of the appended entry.
    ///
    /// The caller guarantees `key` and `value` are non-empty; the store does
    /// not validate input shape.
    pub fn put(&self, key: &str, value: &str) -> Entry {
        let mut data = self.data.lock().unwrap();
        let now = Utc::now();

        let history = data
            .entry(key.to_string())
            .or_insert_with(|| KeyHistory::new(key.to_string()));

        history.retire_latest(now);

        let entry = Entry::new(value.to_string(), now);
        history.push(entry.clone());
        entry
    }

    /// Returns the current value of `key`.
    ///
    /// `NotFound` when the key was never written, its history was cleared,
    /// or its latest entry is soft-deleted.
    pub fn get(&self, key: &str) -> StoreResult<String> {
        let data = self.data.lock().unwrap();

        let latest = data
            .get(key)
            .and_then(|history| history.latest())
            .ok_or(StoreError::NotFound)?;

        if !latest.is_live() {
            return Err(StoreError::NotFound);
        }

        Ok(latest.value().to_string())
    }

    /// Returns the full history of `key` in append order, soft-deleted
    /// entries included.
    ///
    /// `NotFound` only when the key is absent or its history is empty; a key
    /// whose current value is soft-deleted still has a readable history.
    /// The returned entries are copies.
    pub fn get_all(&self, key: &str) -> StoreResult<Vec<Entry>> {
        let data = self.data.lock().unwrap();

        let history = data.get(key).ok_or(StoreError::NotFound)?;
        if history.is_empty() {
            return Err(StoreError::NotFound);
        }

        Ok(history.entries().to_vec())
    }

    /// Soft-deletes the current latest entry of `key`.
    ///
    /// No-op when the key is absent, its history is empty, or the latest
    /// entry is already retired. Never errors.
    pub fn delete(&self, key: &str) {
        let mut data = self.data.lock().unwrap();
        let now = Utc::now();

        if let Some(history) = data.get_mut(key) {
            history.retire_latest(now);
        }
    }

    /// Empties the history of `key`.
    ///
    /// The key's slot stays in the mapping; a later put starts a fresh
    /// single-entry history. No-op when the key is absent. Never errors.
    pub fn delete_all(&self, key: &str) {
        let mut data = self.data.lock().unwrap();

        if let Some(history) = data.get_mut(key) {
            history.clear();
        }
    }

    /// Returns true if `key` has a slot in the mapping, even with an empty
    /// history.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.lock().unwrap().contains_key(key)
    }
}
