//! Handler for POST /auth/register.

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use vp_core::repositories::UserRepository;
use vp_core::services::otp::OtpStore;
use vp_core::services::sms::SmsSender;
use vp_shared::types::response::ApiResponse;

use crate::dto::auth::{RegisterRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::state::AppState;

pub async fn register<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: OtpStore + 'static,
    M: SmsSender + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(auth) => {
            info!(user_id = %auth.user.id, "user registered");
            HttpResponse::Created().json(ApiResponse::with_data(
                "Registration successful",
                TokenResponse::from(auth),
            ))
        }
        Err(err) => domain_error_response(&err),
    }
}
