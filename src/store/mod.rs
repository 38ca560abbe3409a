//! Record Store Module
//!
//! The read-only port the listing service queries, plus an in-memory
//! implementation backed by a seed record set.

mod memory;
pub mod seed;

pub use memory::MemoryRecordStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Advocate;
use crate::query::Predicate;

/// Offset/limit bound applied to a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u32,
}

// == Record Store ==
/// Read access to the advocate collection.
///
/// Implementations must return rows in ascending `id` order so that
/// consecutive windows over the same predicate never overlap or skip rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches records matching `predicate`, bounded by `window` when given.
    async fn fetch(
        &self,
        predicate: &Predicate,
        window: Option<Window>,
    ) -> Result<Vec<Advocate>, StoreError>;

    /// Number of records matching `predicate`, ignoring any window.
    ///
    /// Defaults to the length of an unbounded fetch. Stores with an
    /// aggregate count may override this as long as the value is identical.
    async fn count(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        Ok(self.fetch(predicate, None).await?.len() as u64)
    }
}
