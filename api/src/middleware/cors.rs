//! CORS configuration.
//!
//! Permissive in development so local clients and tools can hit the API
//! freely; in production, origins come from the `ALLOWED_ORIGINS`
//! environment variable (comma-separated).

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vp_shared::config::Environment;

pub fn create_cors() -> Cors {
    if Environment::from_env().is_production() {
        create_production_cors()
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

fn create_production_cors() -> Cors {
    let origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        cors = cors.allowed_origin(origin);
    }

    cors
}
