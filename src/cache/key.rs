//! Cache key for listing results.

use std::fmt;

use crate::listing::Page;
use crate::query::FilterSpec;

/// The full sanitized parameter tuple of one listing request.
///
/// Two requests share a cache entry only if every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub page: u32,
    pub limit: u32,
    pub filter: FilterSpec,
}

impl ListingKey {
    pub fn new(filter: &FilterSpec, page: Page) -> Self {
        Self {
            page: page.index,
            limit: page.size,
            filter: filter.clone(),
        }
    }
}

impl fmt::Display for ListingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let f_opt = |v: &Option<String>| v.clone().unwrap_or_default();
        let n_opt = |v: Option<i32>| v.map(|n| n.to_string()).unwrap_or_default();

        write!(
            f,
            "advocates:page={}:limit={}:city={}:degree={}:min={}:max={}:search={}",
            self.page,
            self.limit,
            f_opt(&self.filter.city),
            f_opt(&self.filter.degree),
            n_opt(self.filter.min_experience),
            n_opt(self.filter.max_experience),
            f_opt(&self.filter.search_term),
        )
    }
}
