//! User persistence implementations.

mod memory_users;

pub use memory_users::InMemoryUserRepository;
