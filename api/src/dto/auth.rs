//! Authentication request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use vp_core::domain::entities::User;
use vp_core::domain::value_objects::AuthResponse;
use vp_core::services::auth::OtpDispatch;
use vp_shared::utils::phone::is_valid_phone;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "password must be 8 to 128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// 10-digit phone number
    #[validate(custom = "validate_phone")]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(custom = "validate_phone")]
    pub phone: String,

    /// 6-digit verification code
    #[validate(length(equal = 6, message = "otp must be exactly 6 digits"))]
    pub otp: String,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("phone must be a 10-digit number".into());
        Err(err)
    }
}

/// Body of a successful OTP dispatch
#[derive(Debug, Clone, Serialize)]
pub struct SendOtpResponse {
    pub message_id: String,
    pub expires_at: DateTime<Utc>,

    /// Present only when `expose_code_for_testing` is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<OtpDispatch> for SendOtpResponse {
    fn from(dispatch: OtpDispatch) -> Self {
        Self {
            message_id: dispatch.message_id,
            expires_at: dispatch.expires_at,
            code: dispatch.code,
        }
    }
}

/// Body of a successful authentication
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

impl From<AuthResponse> for TokenResponse {
    fn from(auth: AuthResponse) -> Self {
        Self {
            user: auth.user,
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            expires_in: auth.expires_in,
        }
    }
}
