//! Cache Module
//!
//! Provides the listing cache: TTL expiration, tag invalidation and LRU
//! eviction, behind the [`ListingCache`] port.

mod entry;
mod key;
mod layer;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::ListingKey;
pub use layer::{ListingCache, NoopCache};
pub use stats::CacheStats;
pub use store::MemoryCache;

use std::time::Duration;

// == Public Constants ==
/// Invalidation tag carried by every cached listing of the advocate collection
pub const COLLECTION_TAG: &str = "advocates";

/// Lifetime of a cached listing
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
