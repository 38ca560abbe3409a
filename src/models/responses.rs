//! Response DTOs for the listing API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::listing::Page;
use crate::models::Advocate;

/// One page of matching advocates plus pagination metadata.
///
/// Serialized as `{ data, total, page, limit, totalPages }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult {
    /// Rows of the requested page, in ascending id order
    #[serde(rename = "data")]
    pub rows: Vec<Advocate>,
    /// Number of advocates matching the filter, ignoring pagination
    pub total: u64,
    /// 1-based page index that was served
    pub page: u32,
    /// Effective (clamped) page size
    pub limit: u32,
    /// `ceil(total / limit)`
    pub total_pages: u64,
}

impl ListingResult {
    /// Assembles a result, deriving `total_pages` from `total` and the page size.
    pub fn new(rows: Vec<Advocate>, total: u64, page: Page) -> Self {
        Self {
            rows,
            total,
            page: page.index,
            limit: page.size,
            total_pages: page.total_pages(total),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of entries dropped by tag invalidation
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for POST /api/advocates/revalidate
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    /// Tag that was fired
    pub tag: String,
    /// Number of cached listings dropped
    pub invalidated: usize,
}

impl RevalidateResponse {
    /// Creates a new RevalidateResponse
    pub fn new(tag: impl Into<String>, invalidated: usize) -> Self {
        Self {
            tag: tag.into(),
            invalidated,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
