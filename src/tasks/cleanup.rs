//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cached listings.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that periodically sweeps expired listings.
///
/// Expired entries are never served between sweeps; the sweep only frees
/// the memory held by entries nobody asks for again.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::new(1000);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: MemoryCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs_f64()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired listings", removed);
            } else {
                debug!("TTL cleanup: no expired listings found");
            }
        }
    })
}
