//! Business services

pub mod auth;
pub mod otp;
pub mod password;
pub mod sms;
pub mod token;
