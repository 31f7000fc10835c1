//! # Veriphone Shared
//!
//! Cross-cutting types shared by every layer of the Veriphone backend:
//! configuration, the API response envelope, and phone number utilities.

pub mod config;
pub mod types;
pub mod utils;
