//! # HTTP API Errors
//!
//! Error types for the entries API. Validation failures map to 400, store
//! "not found" maps to 404; nothing in this subsystem is a server fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Entries API errors.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Key path segment missing or empty
    #[error("key not provided")]
    MissingKey,

    /// Request body missing entirely
    #[error("request body is empty")]
    EmptyBody,

    /// Request body failed to decode as JSON
    #[error("request body decode error: {0}")]
    InvalidBody(String),

    /// Value field missing or empty
    #[error("value must be set")]
    EmptyValue,

    /// No current value or history for the key
    #[error("no value")]
    NotFound,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingKey => StatusCode::BAD_REQUEST,
            ApiError::EmptyBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyValue => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingKey.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidBody("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EmptyValue.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::MissingKey);
        assert_eq!(body.error, "key not provided");
        assert_eq!(body.code, 400);
    }

    #[test]
    fn test_error_response_serializes_error_and_code() {
        let json = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(json["error"], "no value");
        assert_eq!(json["code"], 404);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
