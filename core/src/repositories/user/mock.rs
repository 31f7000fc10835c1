//! In-memory user repository for tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::{DomainError, DomainResult};

use super::UserRepository;

/// HashMap-backed user repository used in unit tests.
///
/// Set `fail` to make every call error, for exercising the
/// internal-error paths of callers.
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
    pub fail: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_fail(&self) -> DomainResult<()> {
        if self.fail {
            Err(DomainError::Internal {
                message: "user repository error".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.check_fail()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        self.check_fail()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        self.check_fail()?;
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        self.check_fail()?;
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(DomainError::Internal {
                message: format!("user {} not found", user.id),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_find_by_email() {
        let repo = MockUserRepository::new();
        let user = User::with_email("a@example.com".into(), "hash".into());
        repo.create(user.clone()).await.unwrap();

        let found = repo.find_by_email("a@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
        assert!(repo.find_by_email("b@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_requires_existing_user() {
        let repo = MockUserRepository::new();
        let user = User::with_phone("5551234567".into());
        assert!(repo.update(user).await.is_err());
    }

    #[tokio::test]
    async fn failing_repository_errors_on_every_call() {
        let repo = MockUserRepository::failing();
        assert!(repo.find_by_phone("5551234567").await.is_err());
    }
}
