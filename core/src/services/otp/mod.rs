//! OTP issuance and verification.
//!
//! The [`OtpService`] owns the lifecycle of one-time codes: it generates
//! them, stores them with a time-to-live, and consumes them atomically on
//! verification. The backing store is injected through [`OtpStore`], so
//! the same service runs against the in-memory store in tests and Redis
//! in production.

mod config;
mod service;
mod store;

#[cfg(test)]
pub(crate) mod tests;

pub use config::OtpConfig;
pub use service::OtpService;
pub use store::OtpStore;
