//! In-memory record store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Advocate;
use crate::query::Predicate;
use crate::store::{RecordStore, Window};

/// Immutable advocate collection held in memory, sorted by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<Vec<Advocate>>,
}

impl MemoryRecordStore {
    /// Creates a store over `records`, establishing ascending id order.
    pub fn new(mut records: Vec<Advocate>) -> Self {
        records.sort_by_key(|a| a.id);
        Self {
            records: Arc::new(records),
        }
    }

    /// Total number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch(
        &self,
        predicate: &Predicate,
        window: Option<Window>,
    ) -> Result<Vec<Advocate>, StoreError> {
        let matching = self.records.iter().filter(|a| predicate.matches(a));

        let rows = match window {
            Some(Window { offset, limit }) => matching
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(limit as usize)
                .cloned()
                .collect(),
            None => matching.cloned().collect(),
        };

        Ok(rows)
    }

    async fn count(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        Ok(self.records.iter().filter(|a| predicate.matches(a)).count() as u64)
    }
}
