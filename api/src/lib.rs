//! # HTTP API Layer
//!
//! Exposes the authentication flows over actix-web. Handlers are generic
//! over the injected collaborators so integration tests can wire the
//! same routes against in-memory backends.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
