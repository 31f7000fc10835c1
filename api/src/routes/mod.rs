//! Route registration.

use actix_web::web;

use vp_core::repositories::UserRepository;
use vp_core::services::otp::OtpStore;
use vp_core::services::sms::SmsSender;

pub mod auth;
pub mod health;

/// Register every route against a concrete set of collaborators.
///
/// Instantiated once per wiring: production binds Redis and the real
/// delivery channel, tests bind the in-memory doubles.
pub fn configure<U, S, M>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: OtpStore + 'static,
    M: SmsSender + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register::<U, S, M>))
                .route("/login", web::post().to(auth::login::<U, S, M>))
                .route("/otp/send", web::post().to(auth::send_otp::<U, S, M>))
                .route("/otp/verify", web::post().to(auth::verify_otp::<U, S, M>)),
        );
}
