//! SMS delivery implementations.

mod log_sender;

pub use log_sender::LogSmsSender;
