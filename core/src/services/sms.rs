//! SMS delivery contract

use async_trait::async_trait;

/// Delivery channel for verification codes.
///
/// Implementations are responsible for actually notifying the user and
/// must never block on the OTP store. Returns a provider message id on
/// success.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
