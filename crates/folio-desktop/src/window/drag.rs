//! Title-bar drag gesture
//!
//! A gesture lives from pointer press to pointer release. Only one pointer
//! gesture can be in flight at a time.

use crate::types::{Vec2, WindowId};

/// In-flight drag of a single window
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub window_id: WindowId,
    /// Pointer position when the gesture started
    pub start_pointer: Vec2,
    /// Window offset when the gesture started
    pub start_position: Vec2,
}

impl DragState {
    pub fn new(window_id: WindowId, start_pointer: Vec2, start_position: Vec2) -> Self {
        Self {
            window_id,
            start_pointer,
            start_position,
        }
    }

    /// Pointer delta since the gesture started
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.start_pointer
    }

    /// Window offset for a given pointer delta
    pub fn position_for(&self, delta: Vec2) -> Vec2 {
        self.start_position + delta
    }
}
