//! # Key/value storage
//!
//! The persistence seam for client settings. Browsers back this with
//! `window.localStorage`; tests and native embeddings use [`MemoryStore`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`].
///
/// None of these are fatal for the client: callers keep their in-memory
/// value and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store does not exist (private mode, disabled storage, no window).
    #[error("storage is unavailable")]
    Unavailable,
    /// Reading an entry failed.
    #[error("failed to read `{key}`: {reason}")]
    Read {
        /// Entry key.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },
    /// Writing an entry failed (quota exceeded, security error, ...).
    #[error("failed to write `{key}`: {reason}")]
    Write {
        /// Entry key.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },
}

/// String-keyed, string-valued storage.
pub trait KeyValueStore {
    /// Reads the raw value stored under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`].
///
/// Single-threaded like the UI it serves. Counts successful writes and can be
/// put into a failing mode to simulate a full or disabled browser store.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Makes every subsequent write fail with [`StorageError::Write`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries.borrow().len())
            .field("writes", &self.writes.get())
            .field("fail_writes", &self.fail_writes.get())
            .finish()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("theme"), Ok(None));

        store.write("theme", "dark").unwrap();
        assert_eq!(store.read("theme"), Ok(Some("dark".to_string())));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_store_with_entries() {
        let store = MemoryStore::with_entries([("isAuthenticated", "true")]);
        assert_eq!(store.get("isAuthenticated").as_deref(), Some("true"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_memory_store_failing_writes_leave_entries_untouched() {
        let store = MemoryStore::with_entries([("theme", "light")]);
        store.fail_writes(true);

        let err = store.write("theme", "dark").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "theme"));
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.write_count(), 0);

        store.fail_writes(false);
        assert!(store.write("theme", "dark").is_ok());
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Write {
            key: "theme".to_string(),
            reason: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write `theme`: quota exceeded");
        assert_eq!(StorageError::Unavailable.to_string(), "storage is unavailable");
    }
}
