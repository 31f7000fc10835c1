//! Domain entities

pub mod otp_code;
pub mod user;

pub use otp_code::OtpCode;
pub use user::{User, UserRole};
