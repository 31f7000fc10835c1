//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// Default access token lifetime (15 minutes)
const DEFAULT_ACCESS_TTL_SECONDS: u64 = 900;

/// Default refresh token lifetime (7 days)
const DEFAULT_REFRESH_TTL_SECONDS: u64 = 604_800;

/// Configuration for JWT access and refresh tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_ttl_seconds: u64,

    /// Refresh token lifetime in seconds
    pub refresh_ttl_seconds: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("dev-access-secret-change-me"),
            refresh_secret: String::from("dev-refresh-secret-change-me"),
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_seconds: DEFAULT_REFRESH_TTL_SECONDS,
        }
    }
}

impl JwtConfig {
    /// Load from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET`,
    /// `JWT_ACCESS_TTL_SECONDS` and `JWT_REFRESH_TTL_SECONDS`,
    /// keeping development defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_ttl_seconds: std::env::var("JWT_ACCESS_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_ttl_seconds),
            refresh_ttl_seconds: std::env::var("JWT_REFRESH_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_ttl_seconds),
        }
    }
}
