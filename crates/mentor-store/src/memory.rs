//! In-process key-value backend.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::KeyValueStorage;
use crate::error::StorageError;

/// A `HashMap`-backed store, optionally capped at a total byte quota.
///
/// The quota models browser storage limits: a write that would push the sum
/// of all stored values past the limit fails and leaves the old value intact.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `limit` bytes are in use.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Seed a value directly, bypassing the quota.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("absent").unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let storage = MemoryStorage::with_quota(8);
        storage.write("k", "small").unwrap();

        let err = storage.write("k", "far too large").expect_err("over quota");
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 8, .. }));
        assert_eq!(storage.get("k").as_deref(), Some("small"));
    }

    #[test]
    fn quota_counts_other_keys() {
        let storage = MemoryStorage::with_quota(10);
        storage.write("a", "12345").unwrap();
        assert!(storage.write("b", "123456").is_err());
        assert!(storage.write("b", "12345").is_ok());
    }
}
