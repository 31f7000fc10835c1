//! Main authentication service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};

use vp_shared::utils::phone::mask_phone;

use crate::domain::entities::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::otp::{OtpService, OtpStore};
use crate::services::password;
use crate::services::sms::SmsSender;
use crate::services::token::TokenService;

use super::config::AuthConfig;

/// Outcome of dispatching an OTP to the delivery channel
#[derive(Debug, Clone)]
pub struct OtpDispatch {
    /// Provider message id from the delivery channel
    pub message_id: String,
    /// When the issued code stops being valid
    pub expires_at: DateTime<Utc>,
    /// Plaintext code, present only when `expose_code_for_testing` is on
    pub code: Option<String>,
}

/// Orchestrates registration, login, and the phone verification flow.
///
/// Composes the OTP manager, the user repository, the token service and
/// the SMS delivery channel; each collaborator is injected so the whole
/// flow is testable against in-memory doubles.
pub struct AuthService<U, S, M>
where
    U: UserRepository,
    S: OtpStore,
    M: SmsSender,
{
    users: Arc<U>,
    otp_service: Arc<OtpService<S>>,
    sms_sender: Arc<M>,
    token_service: Arc<TokenService>,
    config: AuthConfig,
}

impl<U, S, M> AuthService<U, S, M>
where
    U: UserRepository,
    S: OtpStore,
    M: SmsSender,
{
    pub fn new(
        users: Arc<U>,
        otp_service: Arc<OtpService<S>>,
        sms_sender: Arc<M>,
        token_service: Arc<TokenService>,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            otp_service,
            sms_sender,
            token_service,
            config,
        }
    }

    /// Register a new account with email and password
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = password::hash_password(password)?;
        let user = self
            .users
            .create(User::with_email(email.to_string(), password_hash))
            .await?;

        tracing::info!(user_id = %user.id, event = "user_registered", "Registered new user");
        self.issue_tokens(user).await
    }

    /// Log in with email and password.
    ///
    /// Unknown email and wrong password fail identically so the endpoint
    /// is not an account-existence oracle.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .clone()
            .ok_or(AuthError::InvalidCredentials)?;
        if !password::verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        user.update_last_login();
        let user = self.users.update(user).await?;

        tracing::info!(user_id = %user.id, event = "user_login", "User logged in");
        self.issue_tokens(user).await
    }

    /// Issue an OTP for a phone number and hand it to the delivery channel.
    ///
    /// The returned `code` field is populated only under the test-only
    /// exposure flag; production callers receive the dispatch metadata
    /// and nothing else.
    pub async fn send_otp(&self, phone: &str) -> DomainResult<OtpDispatch> {
        let otp = self.otp_service.send_otp(phone).await?;

        let message_id = self
            .sms_sender
            .send_code(phone, &otp.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to hand code to delivery channel"
                );
                AuthError::DeliveryFailure
            })?;

        let code = self.config.expose_code_for_testing.then(|| otp.code.clone());

        Ok(OtpDispatch {
            message_id,
            expires_at: otp.expires_at,
            code,
        })
    }

    /// Verify an OTP and authenticate the phone's owner.
    ///
    /// On success the code is consumed, the user record is found or
    /// created by phone, and a fresh token pair is issued.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<AuthResponse> {
        self.otp_service.verify_otp(phone, code).await?;

        let mut user = match self.users.find_by_phone(phone).await? {
            Some(existing) => existing,
            None => {
                let created = self.users.create(User::with_phone(phone.to_string())).await?;
                tracing::info!(
                    user_id = %created.id,
                    phone = %mask_phone(phone),
                    event = "user_created_from_phone",
                    "Created user on first phone verification"
                );
                created
            }
        };

        user.update_last_login();
        let user = self.users.update(user).await?;

        self.issue_tokens(user).await
    }

    /// Sign a token pair and persist the refresh token hash on the user
    async fn issue_tokens(&self, mut user: User) -> DomainResult<AuthResponse> {
        let tokens = self.token_service.generate_token_pair(&user)?;

        user.set_refresh_token_hash(TokenService::hash_refresh_token(&tokens.refresh_token));
        let user = self.users.update(user).await?;

        Ok(AuthResponse::new(user, tokens))
    }
}
