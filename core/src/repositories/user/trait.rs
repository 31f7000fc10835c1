//! User repository trait definition

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Persistence boundary for user accounts.
///
/// The backing store is an external collaborator; implementations range
/// from the in-memory development store to a real database. All methods
/// surface failures as `DomainError::Internal`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>>;

    /// Persist a new user, returning the stored record
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user, returning the stored record
    async fn update(&self, user: User) -> DomainResult<User>;
}
