//! Cache Entry Module
//!
//! Defines the structure for individual cached listings with TTL and tags.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;

use crate::cache::ListingKey;
use crate::models::ListingResult;

// == Cache Entry ==
/// A cached listing with its lifetime and invalidation tags.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached listing
    pub value: ListingResult,
    /// How long the listing stays fresh after it is written
    pub ttl: Duration,
    /// Tags that can invalidate this entry ahead of expiry
    pub tags: HashSet<String>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry living for `ttl`.
    ///
    /// # Arguments
    /// * `value` - The listing to cache
    /// * `ttl` - Time to live
    /// * `tags` - Invalidation tags
    pub fn new(value: ListingResult, ttl: Duration, tags: &[&str]) -> Self {
        Self {
            value,
            ttl,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Returns true if the entry carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

// == Entry Expiry ==
/// Expires every entry `ttl` after its latest write.
///
/// Reads never extend an entry's life.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryExpiry;

impl Expiry<ListingKey, Arc<CacheEntry>> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &ListingKey,
        entry: &Arc<CacheEntry>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &ListingKey,
        entry: &Arc<CacheEntry>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}
