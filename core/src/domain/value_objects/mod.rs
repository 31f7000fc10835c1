//! Value objects

pub mod auth_response;

pub use auth_response::{AuthResponse, TokenPair};
