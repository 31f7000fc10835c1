//! In-process OTP store.
//!
//! Backs the service when no Redis URL is configured. Entries expire
//! lazily: an expired entry behaves exactly like an absent one and is
//! dropped on first access.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;

use vp_core::errors::StoreError;
use vp_core::services::otp::OtpStore;

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Thread-safe in-memory key-value store with per-key expiry
#[derive(Default)]
pub struct MemoryOtpStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // Writers only insert and remove; a poisoned map is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries().insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries();
        match entries.remove(key) {
            Some(entry) => Ok(!entry.is_expired()),
            None => Ok(false),
        }
    }

    async fn take_if_match(&self, key: &str, expected: &str) -> Result<bool, StoreError> {
        // The lock is held across the comparison and the removal, which
        // makes consumption atomic: two racing callers cannot both win.
        let mut entries = self.entries();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(false)
            }
            Some(entry) if constant_time_eq(entry.value.as_bytes(), expected.as_bytes()) => {
                entries.remove(key);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }
}
