//! OTP service configuration

use std::time::Duration;

use crate::domain::entities::otp_code::DEFAULT_TTL_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// How long an issued code stays valid
    pub ttl: Duration,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECONDS),
        }
    }
}

impl OtpConfig {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}
