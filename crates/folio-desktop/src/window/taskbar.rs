//! Taskbar projection
//!
//! The taskbar has no state of its own. Every entry is recomputed from the
//! window set and the active pointer.

use serde::Serialize;

use super::window::{Icon, Window};
use crate::types::WindowId;

/// One task in the taskbar strip
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
    pub minimized: bool,
}

/// Project the open windows into taskbar entries, in declaration order.
pub fn project(windows: &[Window], active: Option<&WindowId>) -> Vec<TaskbarEntry> {
    windows
        .iter()
        .filter(|w| w.is_open())
        .map(|w| TaskbarEntry {
            window_id: w.id.clone(),
            label: w.title.clone(),
            icon: w.icon.clone(),
            active: active == Some(&w.id) && !w.is_minimized(),
            minimized: w.is_minimized(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowState;

    fn window(id: &str, state: WindowState) -> Window {
        let mut w = Window::new(WindowId::from(id), id, Icon::default());
        w.state = state;
        w
    }

    #[test]
    fn test_only_open_windows_listed_in_declaration_order() {
        let mut windows = vec![
            window("main", WindowState::Open),
            window("about", WindowState::Closed),
            window("projects", WindowState::Minimized),
        ];
        // z-order must not affect ordering
        windows[2].z_index = 500;

        let entries = project(&windows, None);
        let ids: Vec<&str> = entries.iter().map(|e| e.window_id.as_str()).collect();
        assert_eq!(ids, ["main", "projects"]);
        assert!(entries[1].minimized);
    }

    #[test]
    fn test_minimized_window_never_marked_active() {
        let windows = vec![window("main", WindowState::Minimized)];
        let active = WindowId::from("main");

        let entries = project(&windows, Some(&active));
        assert!(!entries[0].active);
        assert!(entries[0].minimized);
    }
}
