//! In-memory user repository.
//!
//! Keeps users in a process-local map. Durable persistence lives behind
//! the same [`UserRepository`] trait and is provided by a separate
//! deployment concern; this implementation serves development, tests,
//! and single-node setups.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use vp_core::domain::entities::user::User;
use vp_core::errors::{AuthError, DomainResult};
use vp_core::repositories::user::UserRepository;

/// Thread-safe in-memory [`UserRepository`]
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> MutexGuard<'_, HashMap<Uuid, User>> {
        self.users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users();
        Ok(users
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        let users = self.users();
        Ok(users
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        self.users().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users();
        if !users.contains_key(&user.id) {
            return Err(AuthError::UserNotFound.into());
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
