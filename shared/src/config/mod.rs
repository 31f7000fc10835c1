//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `auth` - JWT signing configuration
//! - `cache` - OTP store backend configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the service runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// OTP store backend configuration
    pub cache: CacheConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Echo the generated OTP code in the send response.
    ///
    /// Exists for automated end-to-end tests only. Forced off in
    /// production regardless of the environment variable.
    #[serde(default)]
    pub expose_otp_for_testing: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        let expose_otp_for_testing = match environment {
            // Never echo codes outside development, whatever the env says
            Environment::Production => false,
            _ => std::env::var("EXPOSE_OTP_FOR_TESTING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            expose_otp_for_testing,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
            expose_otp_for_testing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_never_exposes_codes() {
        let config = AppConfig::default();
        assert!(!config.expose_otp_for_testing);
    }
}
