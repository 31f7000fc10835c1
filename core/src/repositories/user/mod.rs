//! User repository interface

mod r#trait;

pub mod mock;

pub use r#trait::UserRepository;
