//! Key-value store contract for OTP codes

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value store with per-key expiry backing the OTP manager.
///
/// Keys are opaque strings; the service namespaces them itself. Every
/// operation must complete within a bounded time and surface
/// [`StoreError`] rather than hang.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store `value` under `key`, replacing any existing entry, with the
    /// given time-to-live.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Fetch the live value for `key`. Expired entries read as absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete `key`, reporting whether an entry existed.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Atomically delete `key` if its live value equals `expected`,
    /// reporting whether the deletion happened.
    ///
    /// This is the single-use consumption primitive: when two callers
    /// race with the correct value, exactly one sees `true`. A mismatch
    /// leaves the entry untouched.
    async fn take_if_match(&self, key: &str, expected: &str) -> Result<bool, StoreError>;
}
