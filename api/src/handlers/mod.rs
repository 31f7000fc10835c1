//! Shared handler support.

pub mod error;
