//! API Handlers
//!
//! HTTP request handlers for each listing service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::{MemoryCache, COLLECTION_TAG};
use crate::config::Config;
use crate::error::Result;
use crate::listing::ListingService;
use crate::models::{
    HealthResponse, ListingParams, ListingResult, RevalidateResponse, StatsResponse,
};
use crate::store::RecordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached listing service
    pub service: Arc<ListingService>,
}

impl AppState {
    /// Creates a new AppState around a listing service.
    pub fn new(service: ListingService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires `store` to `cache` with the configured TTL and store read timeout.
    pub fn from_config(config: &Config, store: Arc<dyn RecordStore>, cache: MemoryCache) -> Self {
        let service = ListingService::new(store, Arc::new(cache))
            .with_ttl(config.cache_ttl())
            .with_read_timeout(config.store_timeout());
        Self::new(service)
    }
}

/// Handler for GET /api/advocates
///
/// Returns one page of advocates matching the query string filters.
///
/// A repeated parameter keeps its first value and malformed numbers fall
/// back to their defaults.
pub async fn list_advocates_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListingResult>> {
    let params = ListingParams::from_pairs(pairs);
    let result = state.service.list(&params.filter(), params.page()).await?;
    Ok(Json(result))
}

/// Handler for POST /api/advocates/revalidate
///
/// Drops every cached advocate listing, e.g. after a bulk load.
pub async fn revalidate_handler(State(state): State<AppState>) -> Result<Json<RevalidateResponse>> {
    let invalidated = state.service.revalidate().await?;
    Ok(Json(RevalidateResponse::new(COLLECTION_TAG, invalidated)))
}

/// Handler for GET /stats
///
/// Returns current listing cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.service.cache_stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, MemoryRecordStore};

    fn query(pairs: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn state() -> AppState {
        let store = Arc::new(MemoryRecordStore::new(seed::advocates()));
        AppState::from_config(&Config::default(), store, MemoryCache::new(100))
    }

    #[tokio::test]
    async fn test_list_handler_defaults() {
        let response = list_advocates_handler(State(state()), query(&[]))
            .await
            .unwrap();

        assert_eq!(response.total, 15);
        assert_eq!(response.rows.len(), 10);
        assert_eq!(response.page, 1);
        assert_eq!(response.limit, 10);
        assert_eq!(response.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_handler_filters() {
        let params = query(&[("degree", "phd"), ("minExperience", "8")]);

        let response = list_advocates_handler(State(state()), params)
            .await
            .unwrap();

        let names: Vec<&str> = response.rows.iter().map(|a| a.last_name.as_str()).collect();
        assert_eq!(names, vec!["Smith", "Lee", "Walker"]);
    }

    #[tokio::test]
    async fn test_revalidate_handler() {
        let state = state();
        list_advocates_handler(State(state.clone()), query(&[]))
            .await
            .unwrap();

        let response = revalidate_handler(State(state)).await.unwrap();
        assert_eq!(response.tag, "advocates");
        assert_eq!(response.invalidated, 1);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(state())).await.unwrap();
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
