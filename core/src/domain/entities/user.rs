//! User account entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// A user account.
///
/// Accounts are created either through email/password registration or
/// implicitly on first successful phone verification, so both identifiers
/// are optional; at least one is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,

    pub email: Option<String>,

    pub phone: Option<String>,

    /// bcrypt hash; never serialized into API responses
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// SHA-256 hash of the active refresh token
    #[serde(skip_serializing)]
    pub refresh_token_hash: Option<String>,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,

    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a user from email registration
    pub fn with_email(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Some(email),
            phone: None,
            password_hash: Some(password_hash),
            refresh_token_hash: None,
            role: UserRole::User,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Create a user from a verified phone number
    pub fn with_phone(phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: None,
            phone: Some(phone),
            password_hash: None,
            refresh_token_hash: None,
            role: UserRole::User,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    /// Record a successful login
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    /// Attach the hash of the currently issued refresh token
    pub fn set_refresh_token_hash(&mut self, hash: String) {
        self.refresh_token_hash = Some(hash);
    }
}
