//! JWT token issuance and validation

mod service;

pub use service::{Claims, TokenService};
