//! Shared utilities

pub mod phone;
