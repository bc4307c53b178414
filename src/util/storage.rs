//! Key/value persistence backends for client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persisted stores serialize themselves to JSON and hand the string to a
//! [`KeyValueStorage`]. The browser build writes to `localStorage`; tests use
//! an in-memory backend whose clones share contents so a "reload" can be
//! simulated by building a second store over the same backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by storage backends and the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (non-browser build, or storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The host storage rejected the operation (quota, privacy mode).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The in-memory backend lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
    /// The value could not be encoded to or decoded from JSON.
    #[error("invalid stored value for {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed string storage, modeled on the Web Storage API.
pub trait KeyValueStorage {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Json { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(storage: &impl KeyValueStorage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Json { key: key.to_owned(), source })?;
    storage.set(key, &raw)
}

/// Browser `localStorage` backend.
///
/// Outside the `csr` build every operation reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(StorageError::Backend(format!("{err:?}"))),
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local backend for tests. Clones share the same map.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        self.len().map(|n| n == 0)
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
