//! Key-value persistence for theme, profile and message-log records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted value in the site is a string under a fixed key, JSON
//! encoded when structured. [`KeyValueStore`] is the seam: the browser build
//! talks to `localStorage`, tests use [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade to "nothing saved" on any failure. Writes report a
//! [`StorageError`] so callers can log it; no caller treats it as fatal.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage write failed for key `{key}`")]
    WriteFailed { key: String },
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-valued key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the raw value for `key`. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backing store cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unreachable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value for `key`.
///
/// Missing keys, unreachable storage and malformed JSON all read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            leptos::logging::warn!("storage read failed for {key}: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("discarding malformed {key}: {e}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the store rejects the write.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// `window.localStorage`. Outside the browser every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _key = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _unused = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store used by tests and by environments without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or locked-down `localStorage`.
    #[must_use]
    pub fn read_only() -> Self {
        Self { items: RefCell::default(), read_only: true }
    }

    /// Raw value for `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed { key: key.to_owned() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
