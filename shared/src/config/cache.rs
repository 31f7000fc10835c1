//! OTP store backend configuration

use serde::{Deserialize, Serialize};

/// Configuration for the key-value store backing the OTP manager
///
/// When `redis_url` is unset the service falls back to the in-process
/// store, which is only suitable for development and tests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL; `None` selects the in-memory store
    pub redis_url: Option<String>,

    /// Per-operation response timeout in milliseconds
    pub response_timeout_ms: u64,

    /// Maximum retry attempts for transient store failures
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (doubled per attempt)
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            response_timeout_ms: 2_000,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    /// Load from environment variables (`REDIS_URL`, `CACHE_TIMEOUT_MS`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: std::env::var("REDIS_URL").ok().filter(|u| !u.is_empty()),
            response_timeout_ms: std::env::var("CACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.response_timeout_ms),
            max_retries: defaults.max_retries,
            retry_delay_ms: defaults.retry_delay_ms,
        }
    }
}
