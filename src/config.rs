//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of a cached listing in seconds
    pub cache_ttl: u64,
    /// Maximum number of listings the cache can hold
    pub cache_max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Upper bound for a single record store read, in milliseconds
    pub store_timeout_ms: u64,
    /// Optional JSON file replacing the built-in advocate seed
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Listing cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached listings (default: 1000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `STORE_TIMEOUT_MS` - Store read timeout in milliseconds (default: 5000)
    /// - `SEED_FILE` - Path to a JSON array of advocates (default: built-in seed)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            store_timeout_ms: parse_var("STORE_TIMEOUT_MS").unwrap_or(defaults.store_timeout_ms),
            seed_file: env::var("SEED_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Listing TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Store read timeout as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 300,
            cache_max_entries: 1000,
            cleanup_interval: 30,
            store_timeout_ms: 5000,
            seed_file: None,
        }
    }
}
