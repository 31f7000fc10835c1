//! OTP manager implementation

use std::sync::Arc;

use vp_shared::utils::phone::mask_phone;

use crate::domain::entities::OtpCode;
use crate::errors::{AuthError, DomainResult};

use super::config::OtpConfig;
use super::store::OtpStore;

/// Key prefix for OTP entries in the store
const KEY_PREFIX: &str = "otp";

/// Manages the lifecycle of one-time codes per phone number.
///
/// Each phone has at most one live code. Issuing a new code replaces the
/// previous one unconditionally; verification consumes the code through
/// the store's atomic compare-and-delete, so a given code verifies at
/// most once even under concurrent attempts.
pub struct OtpService<S: OtpStore> {
    store: Arc<S>,
    config: OtpConfig,
}

fn cache_key(phone: &str) -> String {
    format!("{}:{}", KEY_PREFIX, phone)
}

impl<S: OtpStore> OtpService<S> {
    pub fn new(store: Arc<S>, config: OtpConfig) -> Self {
        Self { store, config }
    }

    /// Issue a new code for a phone number.
    ///
    /// The phone is treated as an opaque key; format validation is the
    /// caller's responsibility. Any previously issued code for the same
    /// phone is invalidated by the overwrite. The plaintext code is
    /// returned for hand-off to the delivery channel, never for echoing
    /// to an API client.
    ///
    /// The only failure mode is an unreachable or timed-out store, which
    /// surfaces as `DomainError::Storage`.
    pub async fn send_otp(&self, phone: &str) -> DomainResult<OtpCode> {
        let otp = OtpCode::generate(phone, self.config.ttl);

        self.store
            .put(&cache_key(phone), &otp.code, self.config.ttl)
            .await?;

        tracing::info!(
            phone = %mask_phone(phone),
            expires_at = %otp.expires_at,
            event = "otp_issued",
            "Issued verification code"
        );
        // Plaintext code is only visible at debug level
        tracing::debug!(phone = %mask_phone(phone), code = %otp.code, "OTP code generated");

        Ok(otp)
    }

    /// Verify and consume a code for a phone number.
    ///
    /// Comparison is exact string equality against the stored value,
    /// performed atomically with the deletion. Absent, expired, and
    /// mismatched codes are indistinguishable to the caller: all fail
    /// with `AuthError::InvalidOtp`. A mismatch leaves the stored code
    /// intact, so wrong guesses neither consume the slot nor touch its
    /// expiry.
    ///
    /// Store failures surface as `DomainError::Storage`, distinct from a
    /// failed verification, so callers can decide whether to retry.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<()> {
        let consumed = self
            .store
            .take_if_match(&cache_key(phone), code)
            .await?;

        if consumed {
            tracing::info!(
                phone = %mask_phone(phone),
                event = "otp_verified",
                "Verification code accepted and consumed"
            );
            Ok(())
        } else {
            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_rejected",
                "Verification code rejected"
            );
            Err(AuthError::InvalidOtp.into())
        }
    }
}

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_by_phone() {
        assert_eq!(cache_key("5551234567"), "otp:5551234567");
    }
}
