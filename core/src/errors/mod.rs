//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication-related failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The submitted OTP code is absent, mismatched, or expired.
    ///
    /// Callers are deliberately unable to tell those cases apart; a
    /// distinct message would leak whether a code was ever issued.
    #[error("Invalid or expired verification code")]
    InvalidOtp,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Code delivery failed")]
    DeliveryFailure,
}

/// Token-related failures
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token generation failed: {message}")]
    Generation { message: String },

    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

/// Failures of the key-value store backing the OTP manager.
///
/// Both variants are transient: the caller may retry with backoff.
/// They must never be conflated with a failed verification.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("OTP store unavailable: {message}")]
    Unavailable { message: String },

    #[error("OTP store operation timed out")]
    Timeout,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether the failure is transient and safe to retry
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}
