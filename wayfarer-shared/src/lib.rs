#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Platform-independent core of the Wayfarer client.
//!
//! Everything in this crate compiles and runs natively so it can be unit
//! tested without a browser; the web crate supplies the browser-backed
//! [`storage::KeyValueStore`] and renders the state held here.

pub mod app_state;
pub mod carousel;
pub mod catalog;
pub mod models;
pub mod settings;
pub mod storage;

pub use app_state::{AUTH_KEY, AppState, THEME_KEY};
pub use catalog::{
    DestinationCatalog, DestinationSubmitter, EmptyCatalog, PendingSubmitter, StaticCatalog,
    SubmitError,
};
pub use models::{Destination, FieldChange, FlagField, FormDraft, FormErrors, TextField, Theme};
pub use settings::{PersistedSetting, StoredValue};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
