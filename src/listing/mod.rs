//! Listing Module
//!
//! Pagination math and the cached listing service.

mod page;
mod service;

pub use page::{Page, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use service::{ListingService, DEFAULT_READ_TIMEOUT};
