//! Entries HTTP Routes
//!
//! Endpoints for writing, reading, and soft-deleting keyed values, plus the
//! per-key history views. Each handler calls exactly one store operation and
//! maps its outcome onto a status code; the store itself never sees
//! unvalidated input.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::observability::Logger;
use crate::store::{Entry, VersionedStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across entry handlers
pub struct EntriesState {
    pub store: Arc<VersionedStore>,
}

impl EntriesState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(VersionedStore::new()),
        }
    }

    pub fn with_store(store: Arc<VersionedStore>) -> Self {
        Self { store }
    }
}

impl Default for EntriesState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct PutEntryRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct PutEntryResponse {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct GetEntryResponse {
    pub key: String,
    pub value: String,
}

/// Wire form of one history entry.
///
/// The soft-delete marker is internal and never serialized to clients.
#[derive(Debug, Serialize)]
pub struct EntryRecord {
    pub value: String,
    #[serde(rename = "enteredAt")]
    pub entered_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            value: entry.value().to_string(),
            entered_at: entry.entered_at(),
        }
    }
}

// ==================
// Router
// ==================

/// Build the entries router
pub fn entry_routes(state: Arc<EntriesState>) -> Router {
    Router::new()
        .route("/entries/:key", put(put_entry))
        .route("/entries/:key", get(get_entry))
        .route("/entries/:key", delete(delete_entry))
        .route("/entries/:key/history", get(get_history))
        .route("/entries/:key/history", delete(delete_history))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Append a new value-version for a key.
///
/// The body is decoded by hand so that a missing body and a malformed body
/// produce distinct 400 responses instead of the extractor's 422.
async fn put_entry(
    State(state): State<Arc<EntriesState>>,
    Path(key): Path<String>,
    body: String,
) -> ApiResult<Json<PutEntryResponse>> {
    let key = validated_key(&key)?;

    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let request: PutEntryRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    if request.value.is_empty() {
        return Err(ApiError::EmptyValue);
    }

    state.store.put(key, &request.value);
    Logger::info("entry_put", &[("key", key)]);

    Ok(Json(PutEntryResponse {
        key: key.to_string(),
        value: request.value,
    }))
}

/// Read the current value of a key.
async fn get_entry(
    State(state): State<Arc<EntriesState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<GetEntryResponse>> {
    let key = validated_key(&key)?;

    let value = state.store.get(key)?;

    Ok(Json(GetEntryResponse {
        key: key.to_string(),
        value,
    }))
}

/// Soft-delete the current value of a key. Accepted even for unknown keys.
async fn delete_entry(
    State(state): State<Arc<EntriesState>>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    let key = validated_key(&key)?;

    state.store.delete(key);
    Logger::info("entry_delete", &[("key", key)]);

    Ok(StatusCode::NO_CONTENT)
}

/// Read the full history of a key, soft-deleted entries included.
async fn get_history(
    State(state): State<Arc<EntriesState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Vec<EntryRecord>>> {
    let key = validated_key(&key)?;

    let entries = state.store.get_all(key)?;
    let records = entries.iter().map(EntryRecord::from).collect();

    Ok(Json(records))
}

/// Wipe the history of a key. Accepted even for unknown keys.
async fn delete_history(
    State(state): State<Arc<EntriesState>>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    let key = validated_key(&key)?;

    state.store.delete_all(key);
    Logger::info("history_delete", &[("key", key)]);

    Ok(StatusCode::NO_CONTENT)
}

/// Reject keys that are empty once surrounding whitespace is stripped.
fn validated_key(key: &str) -> ApiResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingKey);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_validated_key_rejects_blank() {
        assert!(validated_key("").is_err());
        assert!(validated_key("   ").is_err());
        assert_eq!(validated_key(" k ").unwrap(), "k");
    }

    #[test]
    fn test_entry_record_field_names() {
        let entry = Entry::new(
            "v".to_string(),
            Utc.with_ymd_and_hms(2024, 5, 7, 21, 8, 0).unwrap(),
        );
        let record = EntryRecord::from(&entry);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["value"], "v");
        assert!(json["enteredAt"].as_str().unwrap().starts_with("2024-05-07T21:08:00"));
        // Delete marker never leaves the process
        assert!(json.get("deletedAt").is_none());
        assert!(json.get("marker").is_none());
    }

    #[test]
    fn test_state_shares_one_store() {
        let store = Arc::new(VersionedStore::new());
        let state = EntriesState::with_store(store.clone());

        store.put("k", "v");
        assert_eq!(state.store.get("k").unwrap(), "v");
    }
}
