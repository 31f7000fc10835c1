//! Veriphone API server entry point.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use vp_core::services::auth::{AuthConfig, AuthService};
use vp_core::services::otp::{OtpConfig, OtpService, OtpStore};
use vp_core::services::token::TokenService;
use vp_infra::cache::{MemoryOtpStore, RedisClient};
use vp_infra::database::InMemoryUserRepository;
use vp_infra::sms::LogSmsSender;
use vp_shared::config::AppConfig;

use vp_api::state::AppState;
use vp_api::{middleware, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(environment = ?config.environment, "starting veriphone API server");

    match config.cache.redis_url.clone() {
        Some(url) => {
            let store = RedisClient::new(&url, &config.cache)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            run(config, Arc::new(store)).await
        }
        None => {
            warn!("REDIS_URL not set; codes are held in process memory");
            run(config, Arc::new(MemoryOtpStore::new())).await
        }
    }
}

async fn run<S>(config: AppConfig, store: Arc<S>) -> std::io::Result<()>
where
    S: OtpStore + 'static,
{
    let users = Arc::new(InMemoryUserRepository::new());
    let sms_sender = Arc::new(LogSmsSender::new());
    let otp_service = Arc::new(OtpService::new(store, OtpConfig::default()));
    let token_service = Arc::new(TokenService::new(config.jwt.clone()));

    let auth_service = Arc::new(AuthService::new(
        users,
        otp_service,
        sms_sender,
        token_service,
        AuthConfig::new(config.expose_otp_for_testing),
    ));

    let state = web::Data::new(AppState { auth_service });
    let bind_address = config.server.bind_address();
    info!("listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(routes::configure::<InMemoryUserRepository, S, LogSmsSender>)
    })
    .bind(&bind_address)?
    .run()
    .await
}
