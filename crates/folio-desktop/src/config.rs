//! Desktop configuration
//!
//! Declares the fixed window set and the tunables of the peripheral
//! behaviours. Can be loaded from JSON; every field except `windows` has a
//! default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::clipboard::{COPY_FEEDBACK_MS, DEFAULT_COPY_TEXT};
use crate::clock::CLOCK_INTERVAL_MS;
use crate::effects::{NAVBAR_TINT_THRESHOLD_PX, REVEAL_OFFSET_PX};
use crate::error::{DesktopError, DesktopResult};
use crate::theme::{Theme, THEME_KEY};
use crate::types::WindowId;
use crate::window::{Icon, Window, MAX_Z_INDEX, Z_INDEX_BASELINE};

/// Declaration of one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub id: WindowId,
    pub title: String,
    #[serde(default)]
    pub icon: Icon,
}

impl WindowSpec {
    pub fn new(id: &str, title: &str, icon: Icon) -> Self {
        Self {
            id: WindowId::from(id),
            title: title.to_string(),
            icon,
        }
    }

    /// Build the closed window this entry declares
    pub fn to_window(&self) -> Window {
        Window::new(self.id.clone(), self.title.clone(), self.icon.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Windows in declaration order
    pub windows: Vec<WindowSpec>,
    /// Window opened and activated at startup
    pub initial_window: Option<WindowId>,
    pub z_index_baseline: u32,
    pub default_theme: Theme,
    pub theme_key: String,
    pub copy_feedback_ms: u32,
    pub default_copy_text: String,
    pub clock_interval_ms: u32,
    pub reveal_offset_px: f32,
    pub navbar_tint_threshold: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            initial_window: Some(WindowId::from("main")),
            z_index_baseline: Z_INDEX_BASELINE,
            default_theme: Theme::Dark,
            theme_key: THEME_KEY.to_string(),
            copy_feedback_ms: COPY_FEEDBACK_MS,
            default_copy_text: DEFAULT_COPY_TEXT.to_string(),
            clock_interval_ms: CLOCK_INTERVAL_MS,
            reveal_offset_px: REVEAL_OFFSET_PX,
            navbar_tint_threshold: NAVBAR_TINT_THRESHOLD_PX,
        }
    }
}

impl DesktopConfig {
    /// Default configuration over the given windows
    pub fn with_windows(windows: Vec<WindowSpec>) -> Self {
        Self {
            windows,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check window ids are unique, the initial window is declared and the
    /// z-index baseline leaves room to raise windows
    pub fn validate(&self) -> DesktopResult<()> {
        if self.z_index_baseline >= MAX_Z_INDEX {
            return Err(DesktopError::Config(format!(
                "z_index_baseline must be below {}, got {}",
                MAX_Z_INDEX, self.z_index_baseline
            )));
        }

        let mut seen = BTreeSet::new();
        for spec in &self.windows {
            if !seen.insert(spec.id.as_str()) {
                return Err(DesktopError::Config(format!(
                    "duplicate window id: {}",
                    spec.id
                )));
            }
        }

        if let Some(initial) = &self.initial_window {
            if !seen.contains(initial.as_str()) {
                return Err(DesktopError::WindowNotFound(initial.clone()));
            }
        }

        Ok(())
    }

    /// Closed windows in declaration order
    pub fn build_windows(&self) -> Vec<Window> {
        self.windows.iter().map(WindowSpec::to_window).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = DesktopConfig::from_json(
            r#"{
                "windows": [
                    {"id": "main", "title": "aaron@folio: ~"},
                    {"id": "about", "title": "about.md", "icon": {"kind": "glyph", "text": "👤"}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.windows.len(), 2);
        assert_eq!(config.windows[0].icon, Icon::default());
        assert_eq!(config.z_index_baseline, 100);
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.copy_feedback_ms, 1500);
        assert_eq!(config.initial_window, Some(WindowId::from("main")));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let config = DesktopConfig::with_windows(vec![
            WindowSpec::new("main", "a", Icon::default()),
            WindowSpec::new("main", "b", Icon::default()),
        ]);
        assert!(matches!(config.validate(), Err(DesktopError::Config(_))));
    }

    #[test]
    fn test_undeclared_initial_window_rejected() {
        let config = DesktopConfig::with_windows(vec![WindowSpec::new(
            "about",
            "about",
            Icon::default(),
        )]);
        assert_eq!(
            config.validate(),
            Err(DesktopError::WindowNotFound(WindowId::from("main")))
        );
    }

    #[test]
    fn test_oversized_z_baseline_rejected() {
        let result = DesktopConfig::from_json(
            r#"{"windows": [{"id": "main", "title": "m"}], "z_index_baseline": 4294967295}"#,
        );
        assert!(matches!(result, Err(DesktopError::Config(_))));

        let mut config =
            DesktopConfig::with_windows(vec![WindowSpec::new("main", "m", Icon::default())]);
        config.z_index_baseline = MAX_Z_INDEX - 1;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            DesktopConfig::from_json("{\"windows\": 3}"),
            Err(DesktopError::Config(_))
        ));
    }
}
