//! Advocate Directory - cached listing service for advocate profiles
//!
//! Serves filtered, paginated advocate listings and caches each result
//! for a short TTL, with tag-based invalidation of the whole collection.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod query;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use listing::ListingService;
pub use tasks::spawn_cleanup_task;
