//! Shared application state.

use std::sync::Arc;

use vp_core::repositories::UserRepository;
use vp_core::services::auth::AuthService;
use vp_core::services::otp::OtpStore;
use vp_core::services::sms::SmsSender;

/// State handed to every handler.
///
/// Generic over the injected collaborators so the same routes run
/// against Redis in production and in-memory doubles in tests.
pub struct AppState<U, S, M>
where
    U: UserRepository,
    S: OtpStore,
    M: SmsSender,
{
    pub auth_service: Arc<AuthService<U, S, M>>,
}
