//! Application-wide state: theme and the mock authentication flag.
//!
//! [`AppState`] is built once at startup from a [`KeyValueStore`] and handed
//! to the views that need it. Its fields are private; every mutation goes
//! through a method that updates memory and storage together.

use std::rc::Rc;

use tracing::info;

use crate::models::Theme;
use crate::settings::PersistedSetting;
use crate::storage::KeyValueStore;

/// Storage key for the theme (raw `"light"` / `"dark"`).
pub const THEME_KEY: &str = "theme";
/// Storage key for the authentication flag (JSON boolean).
pub const AUTH_KEY: &str = "isAuthenticated";

/// Theme and authentication flag, persisted on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    theme: PersistedSetting<Theme>,
    authenticated: PersistedSetting<bool>,
}

impl AppState {
    /// Loads both settings from `store`, defaulting to light theme and signed out.
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            theme: PersistedSetting::load(Rc::clone(&store), THEME_KEY, Theme::default()),
            authenticated: PersistedSetting::load(store, AUTH_KEY, false),
        }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        *self.theme.get()
    }

    /// Sets and persists the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Flips between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// Whether the mock login flag is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.get()
    }

    /// Marks the session as signed in. No credentials are checked.
    pub fn login(&mut self) {
        info!("session signed in");
        self.authenticated.set(true);
    }

    /// Marks the session as signed out.
    pub fn logout(&mut self) {
        info!("session signed out");
        self.authenticated.set(false);
    }
}
