//! Password hashing

use crate::errors::{DomainError, DomainResult};

/// bcrypt cost factor
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with bcrypt
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Check a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let hash = hash_password("hunter2!").unwrap();
        assert_ne!(hash, "hunter2!");
        assert!(verify_password("hunter2!", &hash).unwrap());
        assert!(!verify_password("hunter3!", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(verify_password("hunter2!", "not-a-bcrypt-hash").is_err());
    }
}
