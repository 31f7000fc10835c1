//! # Infrastructure Layer
//!
//! Concrete implementations behind the `vp_core` abstractions:
//!
//! - **Cache**: the Redis-backed OTP store with retry and bounded
//!   timeouts, plus an in-process store for development and tests
//! - **SMS**: the log-only delivery channel used outside production
//! - **Database**: the in-memory user repository

pub mod cache;
pub mod database;
pub mod sms;
