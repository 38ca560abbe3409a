//! Error types for the listing service
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failure of a single read against the record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or refused the read
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The read did not complete within the configured bound
    #[error("Record store read timed out after {0:?}")]
    Timeout(Duration),
}

// == Cache Error Enum ==
/// Failure of the listing cache layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache layer cannot be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    Full(String),
}

// == Validation Error ==
/// Malformed query input. Always recovered locally by falling back to a
/// default, never returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {value:?} for parameter '{param}'")]
pub struct ValidationError {
    /// Query parameter name
    pub param: &'static str,
    /// Raw value as received
    pub value: String,
}

// == Listing Error Enum ==
/// Error surfaced by the listing service to its caller.
#[derive(Error, Debug)]
pub enum ListingError {
    /// The bounded or unbounded store read failed
    #[error("Failed to read advocates: {0}")]
    Store(#[from] StoreError),

    /// A cache operation the caller explicitly asked for failed
    #[error("Cache operation failed: {0}")]
    Cache(#[from] CacheError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        // Store-internal detail stays in the logs.
        let (status, message) = match &self {
            ListingError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch advocates",
            ),
            ListingError::Cache(_) => (StatusCode::SERVICE_UNAVAILABLE, "Cache unavailable"),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the listing service.
pub type Result<T> = std::result::Result<T, ListingError>;
