//! Mapping from domain errors to HTTP responses.
//!
//! Client-facing messages never distinguish why a verification failed
//! and never carry internal detail; the detail goes to the log instead.

use actix_web::HttpResponse;
use tracing::{error, warn};
use validator::ValidationErrors;

use vp_core::errors::{AuthError, DomainError};
use vp_shared::types::response::ApiResponse;

/// Translate a [`DomainError`] into the response envelope.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        DomainError::Storage(store) => {
            error!("OTP store failure: {}", store);
            HttpResponse::ServiceUnavailable()
                .json(ApiResponse::<()>::error("Service temporarily unavailable"))
        }
        DomainError::Token(token) => {
            error!("token failure: {}", token);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal server error"))
        }
        DomainError::Internal { message } => {
            error!("internal failure: {}", message);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}

fn auth_error_response(err: &AuthError) -> HttpResponse {
    let body = ApiResponse::<()>::error(err.to_string());
    match err {
        // One message for wrong, expired, and never-issued codes
        AuthError::InvalidOtp => HttpResponse::BadRequest().json(body),
        AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(body),
        AuthError::EmailTaken => HttpResponse::Conflict().json(body),
        AuthError::UserNotFound => HttpResponse::NotFound().json(body),
        AuthError::DeliveryFailure => HttpResponse::ServiceUnavailable().json(body),
    }
}

/// Translate request body validation failures into a 400 response.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("invalid value for {}", field),
            })
        })
        .next()
        .unwrap_or_else(|| "invalid request".to_string());

    warn!("request validation failed: {}", message);
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}
