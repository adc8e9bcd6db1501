//! Core type definitions for the desktop
//!
//! Window identifiers and the small geometry type used for drag offsets.

use serde::{Deserialize, Serialize};

/// Stable window identifier
///
/// Matches the `data-window` name of the window in the page
/// (`"main"`, `"about"`, `"projects"`, ...). Windows are declared once at
/// startup, so identifiers never change for the life of a [`DesktopShell`].
///
/// [`DesktopShell`]: crate::DesktopShell
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create a new identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// 2D vector for pointer positions and window offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_id_compares_with_str() {
        let id = WindowId::from("about");
        assert_eq!(id, "about");
        assert_eq!(id.as_str(), "about");
        assert_eq!(id.to_string(), "about");
    }

    #[test]
    fn test_window_id_serializes_transparently() {
        let id = WindowId::new("projects");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"projects\"");
    }

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(13.0, 25.0));
        assert_eq!(a - b, Vec2::new(7.0, 15.0));
    }
}
