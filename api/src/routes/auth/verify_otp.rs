//! Handler for POST /auth/otp/verify.

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use vp_core::repositories::UserRepository;
use vp_core::services::otp::OtpStore;
use vp_core::services::sms::SmsSender;
use vp_shared::types::response::ApiResponse;
use vp_shared::utils::phone::mask_phone;

use crate::dto::auth::{TokenResponse, VerifyOtpRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::state::AppState;

pub async fn verify_otp<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp(&request.phone, &request.otp)
        .await
    {
        Ok(auth) => {
            info!(
                phone = %mask_phone(&request.phone),
                user_id = %auth.user.id,
                "phone verified"
            );
            HttpResponse::Ok().json(ApiResponse::with_data(
                "Verification successful",
                TokenResponse::from(auth),
            ))
        }
        Err(err) => domain_error_response(&err),
    }
}
