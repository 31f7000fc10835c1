//! OTP store backends.
//!
//! Both backends implement [`vp_core::services::otp::OtpStore`]. Redis is
//! the production backend; the in-memory store exists so the service can
//! run without external dependencies.

mod memory;
mod redis_client;

pub use memory::MemoryOtpStore;
pub use redis_client::RedisClient;
