//! # Persisted settings
//!
//! A [`PersistedSetting`] owns one named value that is loaded from a
//! [`KeyValueStore`] at startup and written back on every change. Persistence
//! is best effort: failures are logged and the in-memory value wins.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::models::Theme;
use crate::storage::KeyValueStore;

/// Conversion between a setting value and its stored string form.
pub trait StoredValue: Sized {
    /// Serialized form written to storage.
    fn encode(&self) -> String;

    /// Parses a stored value; `None` when the text is not a valid encoding.
    fn decode(raw: &str) -> Option<Self>;
}

impl StoredValue for Theme {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl StoredValue for bool {
    fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A single value mirrored to storage under a fixed key.
#[derive(Clone)]
pub struct PersistedSetting<T> {
    key: &'static str,
    value: T,
    store: Rc<dyn KeyValueStore>,
}

impl<T: StoredValue + Clone> PersistedSetting<T> {
    /// Reads `key` from `store`, falling back to `default` when the entry is
    /// missing, unreadable, or not a valid encoding.
    pub fn load(store: Rc<dyn KeyValueStore>, key: &'static str, default: T) -> Self {
        let value = match store.read(key) {
            Ok(Some(raw)) => T::decode(&raw).unwrap_or_else(|| {
                debug!(key, raw = %raw, "ignoring undecodable stored setting");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                warn!(key, error = %err, "storage read failed; using default");
                default
            }
        };
        Self { key, value, store }
    }

    /// Storage key this setting is mirrored under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Current in-memory value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Updates the value and writes it through to storage.
    ///
    /// Returns `true` when the write reached storage. A failed write keeps
    /// the new in-memory value.
    pub fn set(&mut self, value: T) -> bool {
        self.value = value;
        self.persist()
    }

    fn persist(&self) -> bool {
        match self.store.write(self.key, &self.value.encode()) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = self.key, error = %err, "storage write failed; keeping in-memory value");
                false
            }
        }
    }
}

impl<T: PartialEq> PartialEq for PersistedSetting<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedSetting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSetting")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
