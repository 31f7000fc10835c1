//! Handler for POST /auth/otp/send.

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use vp_core::repositories::UserRepository;
use vp_core::services::otp::OtpStore;
use vp_core::services::sms::SmsSender;
use vp_shared::types::response::ApiResponse;
use vp_shared::utils::phone::mask_phone;

use crate::dto::auth::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::state::AppState;

pub async fn send_otp<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: OtpStore + 'static,
    M: SmsSender + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    info!(phone = %mask_phone(&request.phone), "verification code requested");

    match state.auth_service.send_otp(&request.phone).await {
        Ok(dispatch) => HttpResponse::Ok().json(ApiResponse::with_data(
            "Verification code sent",
            SendOtpResponse::from(dispatch),
        )),
        Err(err) => domain_error_response(&err),
    }
}
