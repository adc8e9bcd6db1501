//! Error types for the desktop core
//!
//! Window commands never fail: an unknown window id is a silent no-op.
//! These errors cover the collaborators around the window manager
//! (preference store, clipboard, configuration).

use crate::types::WindowId;

/// Errors that can occur in desktop collaborator operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not declared
    WindowNotFound(WindowId),

    /// A stored or supplied theme name is not `light` or `dark`
    InvalidTheme(String),

    /// The preference store could not be read or written
    Storage(String),

    /// A clipboard sink rejected the write
    Clipboard(String),

    /// Configuration could not be parsed or failed validation
    Config(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidTheme(name) => write!(f, "invalid theme: {}", name),
            Self::Storage(msg) => write!(f, "storage error: {}", msg),
            Self::Clipboard(msg) => write!(f, "clipboard error: {}", msg),
            Self::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
