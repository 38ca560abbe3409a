//! Cache Store Module
//!
//! Main cache engine: a concurrent moka cache with LRU eviction, per-entry
//! TTL and tag invalidation. Operations on different keys never wait on one
//! another.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use moka::notification::RemovalCause;
use moka::policy::EvictionPolicy;

use crate::cache::entry::EntryExpiry;
use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats, ListingCache, ListingKey};
use crate::error::CacheError;
use crate::models::ListingResult;

// == Memory Cache ==
/// Process-local listing cache.
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Clone)]
pub struct MemoryCache {
    /// Key-value storage, bounded and expired by moka
    entries: Cache<ListingKey, Arc<CacheEntry>>,
    /// Performance statistics
    counters: Arc<StatsCounters>,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_entries` listings.
    ///
    /// Beyond that the least recently used listing is evicted.
    pub fn new(max_entries: usize) -> Self {
        let counters = Arc::new(StatsCounters::default());
        let listener = Arc::clone(&counters);

        let entries = Cache::<ListingKey, Arc<CacheEntry>>::builder()
            .max_capacity(max_entries as u64)
            .eviction_policy(EvictionPolicy::lru())
            .expire_after(EntryExpiry)
            .eviction_listener(move |_key, _entry, cause| match cause {
                RemovalCause::Size => listener.record_eviction(),
                RemovalCause::Expired => listener.record_expiration(),
                _ => {}
            })
            .build();

        Self {
            entries,
            counters,
            max_entries,
        }
    }

    // == Cleanup Expired ==
    /// Drops expired entries and applies pending evictions.
    ///
    /// Returns the number of expired entries removed.
    pub async fn cleanup_expired(&self) -> u64 {
        let before = self.counters.expirations();
        self.entries.run_pending_tasks().await;
        self.counters.expirations().saturating_sub(before)
    }

    /// Returns the number of live entries.
    pub async fn len(&self) -> usize {
        self.entries.run_pending_tasks().await;
        usize::try_from(self.entries.entry_count()).unwrap_or(usize::MAX)
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ListingCache for MemoryCache {
    // == Get ==
    async fn get(&self, key: &ListingKey) -> Result<Option<ListingResult>, CacheError> {
        match self.entries.get(key).await {
            Some(entry) => {
                self.counters.record_hit();
                Ok(Some(entry.value.clone()))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    // == Set ==
    /// An existing entry for the key is replaced and its TTL reset.
    async fn set(
        &self,
        key: ListingKey,
        value: ListingResult,
        ttl: Duration,
        tags: &[&str],
    ) -> Result<(), CacheError> {
        if self.max_entries == 0 {
            return Err(CacheError::Full("Cache capacity is zero".to_string()));
        }

        self.entries
            .insert(key, Arc::new(CacheEntry::new(value, ttl, tags)))
            .await;
        Ok(())
    }

    // == Invalidate ==
    /// Drops every entry carrying `tag`, regardless of expiry.
    async fn invalidate(&self, tag: &str) -> Result<usize, CacheError> {
        let tagged: Vec<Arc<ListingKey>> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.has_tag(tag))
            .map(|(key, _)| key)
            .collect();

        let mut dropped = 0;
        for key in tagged {
            if self.entries.remove(&*key).await.is_some() {
                dropped += 1;
            }
        }

        self.counters.record_invalidations(dropped);
        Ok(dropped)
    }

    async fn stats(&self) -> Result<CacheStats, CacheError> {
        Ok(self.counters.snapshot(self.len().await))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Page;
    use crate::query::FilterSpec;

    const TTL: Duration = Duration::from_secs(300);

    fn key(page: i64) -> ListingKey {
        ListingKey::new(&FilterSpec::new(), Page::new(page, 10))
    }

    fn listing(total: u64) -> ListingResult {
        ListingResult::new(Vec::new(), total, Page::default())
    }

    #[tokio::test]
    async fn test_cache_new() {
        let cache = MemoryCache::new(100);
        assert_eq!(cache.len().await, 0);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_set_and_get() {
        let cache = MemoryCache::new(100);

        cache.set(key(1), listing(7), TTL, &["advocates"]).await.unwrap();

        assert_eq!(cache.get(&key(1)).await.unwrap(), Some(listing(7)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_get_nonexistent() {
        let cache = MemoryCache::new(100);
        assert_eq!(cache.get(&key(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cache_overwrite() {
        let cache = MemoryCache::new(100);

        cache.set(key(1), listing(1), TTL, &[]).await.unwrap();
        cache.set(key(1), listing(2), TTL, &[]).await.unwrap();

        assert_eq!(cache.get(&key(1)).await.unwrap(), Some(listing(2)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_ttl_expiration() {
        let cache = MemoryCache::new(100);

        cache
            .set(key(1), listing(1), Duration::from_millis(50), &[])
            .await
            .unwrap();
        assert!(cache.get(&key(1)).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.get(&key(1)).await.unwrap(), None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_invalidate_tag() {
        let cache = MemoryCache::new(100);

        cache.set(key(1), listing(1), TTL, &["advocates"]).await.unwrap();
        cache
            .set(key(2), listing(2), TTL, &["advocates", "other"])
            .await
            .unwrap();
        cache.set(key(3), listing(3), TTL, &["other"]).await.unwrap();

        assert_eq!(cache.invalidate("advocates").await.unwrap(), 2);
        assert_eq!(cache.get(&key(1)).await.unwrap(), None);
        assert_eq!(cache.get(&key(2)).await.unwrap(), None);
        assert_eq!(cache.get(&key(3)).await.unwrap(), Some(listing(3)));
        assert_eq!(cache.stats().await.unwrap().invalidations, 2);
    }

    #[tokio::test]
    async fn test_cache_invalidate_unknown_tag() {
        let cache = MemoryCache::new(100);
        cache.set(key(1), listing(1), TTL, &["advocates"]).await.unwrap();

        assert_eq!(cache.invalidate("missing").await.unwrap(), 0);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_lru_eviction() {
        let cache = MemoryCache::new(3);

        cache.set(key(1), listing(1), TTL, &[]).await.unwrap();
        cache.set(key(2), listing(2), TTL, &[]).await.unwrap();
        cache.set(key(3), listing(3), TTL, &[]).await.unwrap();

        // Cache is full, adding key 4 should evict key 1 (oldest)
        cache.set(key(4), listing(4), TTL, &[]).await.unwrap();

        assert_eq!(cache.len().await, 3);
        assert_eq!(cache.get(&key(1)).await.unwrap(), None);
        assert!(cache.get(&key(2)).await.unwrap().is_some());
        assert!(cache.get(&key(3)).await.unwrap().is_some());
        assert!(cache.get(&key(4)).await.unwrap().is_some());
        assert_eq!(cache.stats().await.unwrap().evictions, 1);
    }

    #[tokio::test]
    async fn test_cache_lru_touch_on_get() {
        let cache = MemoryCache::new(3);

        cache.set(key(1), listing(1), TTL, &[]).await.unwrap();
        cache.set(key(2), listing(2), TTL, &[]).await.unwrap();
        cache.set(key(3), listing(3), TTL, &[]).await.unwrap();
        assert_eq!(cache.len().await, 3);

        // Access key 1 to make it most recently used
        cache.get(&key(1)).await.unwrap().unwrap();
        assert_eq!(cache.len().await, 3);

        // Adding key 4 should evict key 2 (now oldest)
        cache.set(key(4), listing(4), TTL, &[]).await.unwrap();
        assert_eq!(cache.len().await, 3);

        assert!(cache.get(&key(1)).await.unwrap().is_some());
        assert_eq!(cache.get(&key(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cache_zero_capacity_is_full() {
        let cache = MemoryCache::new(0);

        let result = cache.set(key(1), listing(1), TTL, &[]).await;
        assert!(matches!(result, Err(CacheError::Full(_))));
    }

    #[tokio::test]
    async fn test_cache_stats() {
        let cache = MemoryCache::new(100);

        cache.set(key(1), listing(1), TTL, &[]).await.unwrap();
        cache.get(&key(1)).await.unwrap().unwrap(); // hit
        let _ = cache.get(&key(9)).await; // miss

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_cache_cleanup_expired() {
        let cache = MemoryCache::new(100);

        cache
            .set(key(1), listing(1), Duration::from_millis(50), &[])
            .await
            .unwrap();
        cache
            .set(key(2), listing(2), Duration::from_secs(10), &[])
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.cleanup_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get(&key(2)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = MemoryCache::new(10);
        let other = cache.clone();

        cache.set(key(1), listing(3), TTL, &["advocates"]).await.unwrap();

        assert_eq!(other.get(&key(1)).await.unwrap(), Some(listing(3)));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_proceed_during_invalidation_sweep() {
        let cache = MemoryCache::new(1000);

        for page in 1..=500 {
            cache.set(key(page), listing(page as u64), TTL, &["other"]).await.unwrap();
        }
        cache.set(key(601), listing(601), TTL, &["advocates"]).await.unwrap();
        cache.set(key(602), listing(602), TTL, &["advocates"]).await.unwrap();

        let sweeper = cache.clone();
        let sweep = tokio::spawn(async move { sweeper.invalidate("other").await });

        let (key_601, key_602) = (key(601), key(602));
        let (first, second) = tokio::join!(cache.get(&key_601), cache.get(&key_602));

        assert_eq!(first.unwrap(), Some(listing(601)));
        assert_eq!(second.unwrap(), Some(listing(602)));
        assert_eq!(sweep.await.unwrap().unwrap(), 500);
        assert_eq!(cache.len().await, 2);
    }
}
