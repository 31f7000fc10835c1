//! Behavioral tests for the authentication flow

use std::sync::Arc;

use vp_shared::config::JwtConfig;

use crate::errors::{AuthError, DomainError};
use crate::repositories::user::mock::MockUserRepository;
use crate::services::auth::{AuthConfig, AuthService};
use crate::services::otp::tests::mocks::MockOtpStore;
use crate::services::otp::{OtpConfig, OtpService};
use crate::services::token::TokenService;

use super::mocks::MockSmsSender;

type TestAuthService = AuthService<MockUserRepository, MockOtpStore, MockSmsSender>;

struct Fixture {
    service: TestAuthService,
    users: Arc<MockUserRepository>,
    sms: Arc<MockSmsSender>,
}

fn fixture(config: AuthConfig) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let sms = Arc::new(MockSmsSender::new());
    let otp_service = Arc::new(OtpService::new(
        Arc::new(MockOtpStore::new()),
        OtpConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(JwtConfig::default()));

    Fixture {
        service: AuthService::new(
            Arc::clone(&users),
            otp_service,
            Arc::clone(&sms),
            token_service,
            config,
        ),
        users,
        sms,
    }
}

#[tokio::test]
async fn register_then_login() {
    let f = fixture(AuthConfig::default());

    let registered = f.service.register("a@example.com", "hunter2!").await.unwrap();
    assert!(!registered.access_token.is_empty());
    assert_eq!(f.users.user_count(), 1);

    let logged_in = f.service.login("a@example.com", "hunter2!").await.unwrap();
    assert_eq!(logged_in.user.id, registered.user.id);
    assert!(logged_in.user.last_login_at.is_some());
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let f = fixture(AuthConfig::default());
    f.service.register("a@example.com", "hunter2!").await.unwrap();

    let err = f.service.register("a@example.com", "other-pass").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::EmailTaken)));
    assert_eq!(f.users.user_count(), 1);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let f = fixture(AuthConfig::default());
    f.service.register("a@example.com", "hunter2!").await.unwrap();

    let wrong_password = f.service.login("a@example.com", "nope").await.unwrap_err();
    let unknown_email = f.service.login("b@example.com", "hunter2!").await.unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn send_otp_hands_code_to_delivery_channel_only() {
    let f = fixture(AuthConfig::default());

    let dispatch = f.service.send_otp("5551234567").await.unwrap();

    // Default configuration never echoes the code to the caller
    assert!(dispatch.code.is_none());
    assert!(dispatch.message_id.starts_with("mock-msg-"));
    assert!(f.sms.sent_code("5551234567").is_some());
}

#[tokio::test]
async fn send_otp_exposes_code_under_test_flag() {
    let f = fixture(AuthConfig::new(true));

    let dispatch = f.service.send_otp("5551234567").await.unwrap();
    assert_eq!(dispatch.code, f.sms.sent_code("5551234567"));
}

#[tokio::test]
async fn delivery_failure_surfaces_as_such() {
    let users = Arc::new(MockUserRepository::new());
    let otp_service = Arc::new(OtpService::new(
        Arc::new(MockOtpStore::new()),
        OtpConfig::default(),
    ));
    let service = AuthService::new(
        users,
        otp_service,
        Arc::new(MockSmsSender::failing()),
        Arc::new(TokenService::new(JwtConfig::default())),
        AuthConfig::default(),
    );

    let err = service.send_otp("5551234567").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::DeliveryFailure)));
}

#[tokio::test]
async fn verify_otp_creates_user_on_first_success() {
    let f = fixture(AuthConfig::default());

    f.service.send_otp("5551234567").await.unwrap();
    let code = f.sms.sent_code("5551234567").unwrap();

    let response = f.service.verify_otp("5551234567", &code).await.unwrap();
    assert_eq!(response.user.phone.as_deref(), Some("5551234567"));
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(f.users.user_count(), 1);
}

#[tokio::test]
async fn verify_otp_reuses_existing_user() {
    let f = fixture(AuthConfig::default());

    f.service.send_otp("5551234567").await.unwrap();
    let code = f.sms.sent_code("5551234567").unwrap();
    let first = f.service.verify_otp("5551234567", &code).await.unwrap();

    f.service.send_otp("5551234567").await.unwrap();
    let code = f.sms.sent_code("5551234567").unwrap();
    let second = f.service.verify_otp("5551234567", &code).await.unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_eq!(f.users.user_count(), 1);
}

#[tokio::test]
async fn verify_otp_rejects_replay_without_creating_users() {
    let f = fixture(AuthConfig::default());

    f.service.send_otp("5551234567").await.unwrap();
    let code = f.sms.sent_code("5551234567").unwrap();
    f.service.verify_otp("5551234567", &code).await.unwrap();

    let err = f.service.verify_otp("5551234567", &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
    // The failed replay must not have minted a second account
    assert_eq!(f.users.user_count(), 1);
}

#[tokio::test]
async fn verify_otp_with_wrong_code_fails() {
    let f = fixture(AuthConfig::default());

    f.service.send_otp("5551234567").await.unwrap();
    let code = f.sms.sent_code("5551234567").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let err = f.service.verify_otp("5551234567", wrong).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
    assert_eq!(f.users.user_count(), 0);

    // Slot is still live: the correct code goes through afterwards
    f.service.verify_otp("5551234567", &code).await.unwrap();
}
