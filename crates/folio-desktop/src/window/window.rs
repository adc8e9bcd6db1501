//! Window record

use serde::{Deserialize, Serialize};

use crate::types::{Vec2, WindowId};

/// Glyph shown when a window declares no icon
pub const DEFAULT_ICON_GLYPH: &str = "📄";

/// Icon shown in the window title bar and its taskbar entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Icon {
    /// Text glyph (usually an emoji)
    Glyph { text: String },
    /// Image reference, cloned into the taskbar entry
    Image { src: String, alt: String },
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Glyph {
            text: DEFAULT_ICON_GLYPH.to_string(),
        }
    }
}

/// Lifecycle state of a window
///
/// Whether a window is *active* is not stored here: the manager keeps a
/// single active pointer, so at most one window can ever be active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    /// Not shown and absent from the taskbar
    #[default]
    Closed,
    /// Shown on the desktop
    Open,
    /// Open but hidden; still listed in the taskbar
    Minimized,
}

/// A declared desktop window
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub icon: Icon,
    pub state: WindowState,
    /// Stacking rank; higher renders above lower
    pub z_index: u32,
    /// Offset from the window's default layout slot
    pub position: Vec2,
}

impl Window {
    /// Create a closed window at its default slot
    pub fn new(id: WindowId, title: impl Into<String>, icon: Icon) -> Self {
        Self {
            id,
            title: title.into(),
            icon,
            state: WindowState::Closed,
            z_index: 0,
            position: Vec2::ZERO,
        }
    }

    /// Open or minimized
    pub fn is_open(&self) -> bool {
        self.state != WindowState::Closed
    }

    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_closed() {
        let w = Window::new(WindowId::from("about"), "about.txt", Icon::default());
        assert!(!w.is_open());
        assert!(!w.is_minimized());
        assert_eq!(w.position, Vec2::ZERO);
    }

    #[test]
    fn test_minimized_counts_as_open() {
        let mut w = Window::new(WindowId::from("about"), "about.txt", Icon::default());
        w.state = WindowState::Minimized;
        assert!(w.is_open());
        assert!(w.is_minimized());
    }

    #[test]
    fn test_icon_serde_shape() {
        let icon: Icon =
            serde_json::from_str(r#"{"kind":"image","src":"/me.png","alt":"me"}"#).unwrap();
        assert_eq!(
            icon,
            Icon::Image {
                src: "/me.png".to_string(),
                alt: "me".to_string()
            }
        );
    }
}
