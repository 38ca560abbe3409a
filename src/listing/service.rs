//! Cached Listing Service
//!
//! Resolves one `(FilterSpec, Page)` request to a [`ListingResult`], serving
//! repeats from the listing cache until their entry expires or the collection
//! tag is fired.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::cache::{CacheStats, ListingCache, ListingKey, COLLECTION_TAG, DEFAULT_TTL};
use crate::error::{Result, StoreError};
use crate::listing::Page;
use crate::models::ListingResult;
use crate::query::{compose, FilterSpec};
use crate::store::RecordStore;

/// Upper bound for a single store read unless configured otherwise.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

// == Listing Service ==
/// Filtered, paginated and cached access to the advocate collection.
///
/// The store and cache are injected so either can be swapped for a test
/// double. The service never writes to the store.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn RecordStore>,
    cache: Arc<dyn ListingCache>,
    ttl: Duration,
    read_timeout: Duration,
}

impl ListingService {
    // == Constructor ==
    /// Creates a service with the default TTL and read timeout.
    pub fn new(store: Arc<dyn RecordStore>, cache: Arc<dyn ListingCache>) -> Self {
        Self {
            store,
            cache,
            ttl: DEFAULT_TTL,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Overrides how long a computed listing stays cached.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Overrides the bound on each store read.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    // == List ==
    /// Returns one page of advocates matching `filter`.
    ///
    /// A fresh cached result for the same parameters is returned without
    /// touching the store. Otherwise the page rows and the match count are
    /// read concurrently, and the assembled result is cached under the
    /// collection tag. A failed read fails the request and caches nothing.
    /// A failing cache only costs the caching benefit.
    pub async fn list(&self, filter: &FilterSpec, page: Page) -> Result<ListingResult> {
        let key = ListingKey::new(filter, page);

        match self.cache.get(&key).await {
            Ok(Some(hit)) => {
                debug!(%key, "Listing cache hit");
                return Ok(hit);
            }
            Ok(None) => debug!(%key, "Listing cache miss"),
            Err(err) => warn!(%key, error = %err, "Listing cache unavailable, reading from store"),
        }

        let result = match self.load(filter, page).await {
            Ok(result) => result,
            Err(err) => {
                error!(%key, error = %err, "Error fetching advocates");
                return Err(err.into());
            }
        };

        if let Err(err) = self
            .cache
            .set(key.clone(), result.clone(), self.ttl, &[COLLECTION_TAG])
            .await
        {
            warn!(%key, error = %err, "Failed to cache listing");
        }

        Ok(result)
    }

    async fn load(
        &self,
        filter: &FilterSpec,
        page: Page,
    ) -> std::result::Result<ListingResult, StoreError> {
        let predicate = compose(filter);

        let (rows, total) = tokio::try_join!(
            self.bounded(self.store.fetch(&predicate, Some(page.window()))),
            self.bounded(self.store.count(&predicate)),
        )?;

        Ok(ListingResult::new(rows, total, page))
    }

    async fn bounded<T>(
        &self,
        read: impl Future<Output = std::result::Result<T, StoreError>>,
    ) -> std::result::Result<T, StoreError> {
        match tokio::time::timeout(self.read_timeout, read).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.read_timeout)),
        }
    }

    // == Invalidate ==
    /// Fires `tag`, dropping every cached listing that carries it.
    pub async fn invalidate(&self, tag: &str) -> Result<usize> {
        let dropped = self.cache.invalidate(tag).await?;
        info!(tag, dropped, "Invalidated cached listings");
        Ok(dropped)
    }

    /// Drops every cached listing of the advocate collection.
    pub async fn revalidate(&self) -> Result<usize> {
        self.invalidate(COLLECTION_TAG).await
    }

    /// Current counters of the listing cache.
    pub async fn cache_stats(&self) -> Result<CacheStats> {
        Ok(self.cache.stats().await?)
    }
}
