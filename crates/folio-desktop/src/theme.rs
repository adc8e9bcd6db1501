//! Light/dark theme with a persisted preference
//!
//! The preference lives in a single key/value slot. It is read once at
//! startup and written on every toggle. Store failures never reach the
//! user: a bad read falls back to the system hint, a bad write is logged.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DesktopError, DesktopResult};

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

/// Site colour scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to the store and to `data-theme`
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(DesktopError::InvalidTheme(s.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-slot string preference storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> DesktopResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DesktopResult<()>;
}

/// In-memory preference store for testing.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    /// When set, every write fails with this message
    fail_writes: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make subsequent writes fail (for testing degraded paths).
    pub fn fail_writes(&self, reason: &str) {
        *self.fail_writes.borrow_mut() = Some(reason.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> DesktopResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DesktopResult<()> {
        if let Some(reason) = self.fail_writes.borrow().as_ref() {
            return Err(DesktopError::Storage(reason.clone()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme plus the store it is persisted to
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme.
    ///
    /// A valid stored value wins, then the system hint, then `default`.
    pub fn load(store: S, key: &str, system_hint: Option<Theme>, default: Theme) -> Self {
        let stored = match store.get(key) {
            Ok(Some(value)) => match value.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read theme preference");
                None
            }
        };

        let current = stored.or(system_hint).unwrap_or(default);
        debug!(theme = current.as_str(), "theme loaded");
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            warn!(error = %e, "could not persist theme preference");
        }
        debug!(theme = self.current.as_str(), "theme toggled");
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(
            "sepia".parse::<Theme>().unwrap_err(),
            DesktopError::InvalidTheme("sepia".to_string())
        );
    }

    #[test]
    fn test_stored_value_wins() {
        let store = MemoryStore::with_value(THEME_KEY, "light");
        let theme = ThemeController::load(store, THEME_KEY, Some(Theme::Dark), Theme::Dark);
        assert_eq!(theme.current(), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_system_hint_then_default() {
        let theme =
            ThemeController::load(MemoryStore::new(), THEME_KEY, Some(Theme::Light), Theme::Dark);
        assert_eq!(theme.current(), Theme::Light);

        let theme = ThemeController::load(MemoryStore::new(), THEME_KEY, None, Theme::Dark);
        assert_eq!(theme.current(), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_value_ignored() {
        let store = MemoryStore::with_value(THEME_KEY, "neon");
        let theme = ThemeController::load(store, THEME_KEY, None, Theme::Dark);
        assert_eq!(theme.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut theme = ThemeController::load(MemoryStore::new(), THEME_KEY, None, Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(
            theme.store().get(THEME_KEY).unwrap(),
            Some("light".to_string())
        );
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(
            theme.store().get(THEME_KEY).unwrap(),
            Some("dark".to_string())
        );
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let store = MemoryStore::new();
        store.fail_writes("quota exceeded");
        let mut theme = ThemeController::load(store, THEME_KEY, None, Theme::Dark);

        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.store().get(THEME_KEY).unwrap(), None);
    }
}
