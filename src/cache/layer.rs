//! Listing cache port and its implementations.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheStats, ListingKey};
use crate::error::CacheError;
use crate::models::ListingResult;

// == Listing Cache ==
/// Cache collaborator of the listing service.
///
/// Any error is treated by the service as the cache being unavailable.
#[async_trait]
pub trait ListingCache: Send + Sync {
    /// Returns the fresh listing stored under `key`, if any.
    async fn get(&self, key: &ListingKey) -> Result<Option<ListingResult>, CacheError>;

    /// Stores `value` under `key` for `ttl`, tagged with `tags`.
    async fn set(
        &self,
        key: ListingKey,
        value: ListingResult,
        ttl: Duration,
        tags: &[&str],
    ) -> Result<(), CacheError>;

    /// Drops every entry tagged `tag`. Returns the number dropped.
    async fn invalidate(&self, tag: &str) -> Result<usize, CacheError>;

    async fn stats(&self) -> Result<CacheStats, CacheError>;
}

// == Noop Cache ==
/// Cache that never stores anything; every lookup is a miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl ListingCache for NoopCache {
    async fn get(&self, _key: &ListingKey) -> Result<Option<ListingResult>, CacheError> {
        Ok(None)
    }

    async fn set(
        &self,
        _key: ListingKey,
        _value: ListingResult,
        _ttl: Duration,
        _tags: &[&str],
    ) -> Result<(), CacheError> {
        Ok(())
    }

    async fn invalidate(&self, _tag: &str) -> Result<usize, CacheError> {
        Ok(0)
    }

    async fn stats(&self) -> Result<CacheStats, CacheError> {
        Ok(CacheStats::default())
    }
}
