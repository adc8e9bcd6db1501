//! Theme preference persistence in `localStorage`

use folio_desktop::{DesktopError, DesktopResult, PreferenceStore, Theme};

use crate::describe;

/// `localStorage`-backed preference store.
///
/// Private browsing modes can deny storage entirely; reads and writes then
/// fail with [`DesktopError::Storage`] and the theme falls back as usual.
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    pub fn open(window: &web_sys::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> DesktopResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| DesktopError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> DesktopResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DesktopError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> DesktopResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DesktopError::Storage(describe(&e)))
    }
}

/// The colour scheme the OS asks for, if it says
pub fn system_theme_hint(window: &web_sys::Window) -> Option<Theme> {
    let prefers = |scheme: &str| {
        window
            .match_media(&format!("(prefers-color-scheme: {})", scheme))
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    };

    if prefers("light") {
        Some(Theme::Light)
    } else if prefers("dark") {
        Some(Theme::Dark)
    } else {
        None
    }
}
