//! Token storage capability
//!
//! Abstracts the browser-local key-value store the login flow writes the
//! bearer token into. Both the navigation guard and the API client read
//! through this trait; tests and native hosts substitute [`MemoryTokenStore`].

use crate::error::StorageResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-wide string key-value store for the stored credential.
///
/// Reads are infallible by contract: a backend failure is indistinguishable
/// from an absent key, matching how the portal treats a missing token.
pub trait TokenStore: Send + Sync {
    /// Read the raw string stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str);
}

/// In-process token store backed by a mutex-guarded map
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        {
            let mut entries = store.entries.lock().expect("token store lock poisoned");
            entries.insert(key.into(), value.into());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    #[test]
    fn memory_store_round_trips_token() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), None);

        store.set(AuthConfig::TOKEN_KEY, "abc123").unwrap();
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), Some("abc123".into()));

        store.set(AuthConfig::TOKEN_KEY, "def456").unwrap();
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), Some("def456".into()));

        store.remove(AuthConfig::TOKEN_KEY);
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), None);
    }

    #[test]
    fn with_entry_seeds_the_store() {
        let store = MemoryTokenStore::with_entry("token", "seeded");
        assert_eq!(store.get("token"), Some("seeded".into()));
        assert_eq!(store.get("other"), None);
    }
}
