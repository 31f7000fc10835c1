//! Authentication flow orchestration

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthConfig;
pub use service::{AuthService, OtpDispatch};
