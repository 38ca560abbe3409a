//! Pagination coordinates and math.

use crate::store::Window;

/// Page index used when the caller supplies none.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller supplies none.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size ever served.
pub const MAX_LIMIT: u32 = 100;

// == Page ==
/// Sanitized pagination coordinates: `index >= 1`, `1 <= size <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// 1-based page index
    pub index: u32,
    /// Rows per page
    pub size: u32,
}

impl Page {
    /// Clamps raw coordinates into range.
    pub fn new(index: i64, size: i64) -> Self {
        Self {
            index: index.clamp(1, i64::from(u32::MAX)) as u32,
            size: size.clamp(1, i64::from(MAX_LIMIT)) as u32,
        }
    }

    /// Number of matching rows skipped before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.index - 1) * u64::from(self.size)
    }

    /// Bounded read window for this page.
    pub fn window(&self) -> Window {
        Window {
            offset: self.offset(),
            limit: self.size,
        }
    }

    /// `ceil(total / size)`.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.size))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: DEFAULT_PAGE,
            size: DEFAULT_LIMIT,
        }
    }
}
