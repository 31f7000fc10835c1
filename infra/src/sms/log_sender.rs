//! Log-only SMS delivery.
//!
//! Stands in for a real SMS gateway in development and staging. The code
//! is emitted at debug level only; info-level logs carry the masked
//! phone number and the synthetic message id.

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use vp_core::services::sms::SmsSender;
use vp_shared::utils::phone::mask_phone;

/// Delivery channel that writes codes to the log instead of sending them
#[derive(Default)]
pub struct LogSmsSender;

impl LogSmsSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let message_id = format!("log-{}", Uuid::new_v4());

        info!(
            phone = %mask_phone(phone),
            message_id = %message_id,
            "SMS dispatched to log sink"
        );
        debug!(phone = %mask_phone(phone), code = %code, "verification code for local delivery");

        Ok(message_id)
    }
}
