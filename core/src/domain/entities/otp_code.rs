//! One-time password entity for phone-based authentication.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for codes (5 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// A one-time password issued for a phone number.
///
/// At most one live code exists per phone at any time; issuing a new one
/// replaces the previous code wholesale. The record lives only inside the
/// OTP store and is destroyed on successful verification, on expiry, or
/// when superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Phone number this code was issued for
    pub phone: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp past which the code is unusable
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Issue a new code for a phone number with the given time-to-live
    pub fn generate(phone: &str, ttl: std::time::Duration) -> Self {
        let now = Utc::now();
        Self {
            phone: phone.to_string(),
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl.as_secs() as i64),
        }
    }

    /// Draw a uniformly random 6-digit code from the OS CSPRNG.
    ///
    /// `gen_range` rejects rather than folds out-of-range draws, so every
    /// code in `000000..=999999` is equally likely.
    fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Whether the code's expiry timestamp has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration as StdDuration;

    #[test]
    fn generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = OtpCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn codes_are_not_constant() {
        let codes: HashSet<String> = (0..100).map(|_| OtpCode::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn fresh_code_is_not_expired() {
        let otp = OtpCode::generate("5551234567", StdDuration::from_secs(300));
        assert!(!otp.is_expired());
        assert_eq!(otp.phone, "5551234567");
    }

    #[test]
    fn zero_ttl_code_expires_immediately() {
        let otp = OtpCode::generate("5551234567", StdDuration::ZERO);
        std::thread::sleep(StdDuration::from_millis(10));
        assert!(otp.is_expired());
    }

    #[test]
    fn expiry_matches_ttl() {
        let otp = OtpCode::generate("5551234567", StdDuration::from_secs(300));
        let expected = otp.created_at + Duration::seconds(300);
        assert_eq!(otp.expires_at, expected);
    }
}
