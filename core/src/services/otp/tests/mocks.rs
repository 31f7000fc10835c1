//! Mock store implementations for testing the OTP service

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;

use crate::errors::StoreError;
use crate::services::otp::OtpStore;

/// In-memory store mirroring the production fallback: entries carry a
/// deadline and expired entries read as absent.
#[derive(Default)]
pub struct MockOtpStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries
    pub fn live_entries(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .unwrap()
            .values()
            .filter(|(_, deadline)| *deadline > now)
            .count()
    }
}

#[async_trait]
impl OtpStore for MockOtpStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, deadline)) if *deadline <= Instant::now() => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn take_if_match(&self, key: &str, expected: &str) -> Result<bool, StoreError> {
        // Lock held across check and delete: racing callers serialize here
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, deadline)) if *deadline <= Instant::now() => {
                entries.remove(key);
                Ok(false)
            }
            Some((value, _)) if constant_time_eq(value.as_bytes(), expected.as_bytes()) => {
                entries.remove(key);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }
}

/// Store whose every operation fails, for exercising storage error paths
pub struct UnavailableOtpStore;

#[async_trait]
impl OtpStore for UnavailableOtpStore {
    async fn put(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), StoreError> {
        Err(StoreError::Unavailable {
            message: "connection refused".to_string(),
        })
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Timeout)
    }

    async fn remove(&self, _key: &str) -> Result<bool, StoreError> {
        Err(StoreError::Timeout)
    }

    async fn take_if_match(&self, _key: &str, _expected: &str) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable {
            message: "connection refused".to_string(),
        })
    }
}
