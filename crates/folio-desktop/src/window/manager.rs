//! Window manager
//!
//! Owns the declared windows, the single active pointer and the z-index
//! counter, and keeps the taskbar projection in step with them. Every
//! command ends by re-rendering the taskbar so callers can read
//! [`WindowManager::taskbar`] straight after dispatching.

use tracing::debug;

use super::drag::DragState;
use super::taskbar::{self, TaskbarEntry};
use super::window::{Window, WindowState};
use crate::types::{Vec2, WindowId};

/// Starting value of the z-index counter
pub const Z_INDEX_BASELINE: u32 = 100;

/// Largest z-index CSS accepts; the counter stops here
pub const MAX_Z_INDEX: u32 = i32::MAX as u32;

/// Window manager for a fixed set of declared windows
pub struct WindowManager {
    /// Windows in declaration order
    windows: Vec<Window>,
    /// The one active window, if any
    active: Option<WindowId>,
    /// Highest z-index handed out so far; never decreases
    highest_z: u32,
    /// Floor used when rescanning z-indices on focus
    baseline: u32,
    /// Current title-bar drag, if any
    drag: Option<DragState>,
    /// Last rendered taskbar
    taskbar: Vec<TaskbarEntry>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl WindowManager {
    /// Create a manager over the given windows with the default baseline
    pub fn new(windows: Vec<Window>) -> Self {
        Self::with_baseline(windows, Z_INDEX_BASELINE)
    }

    /// Create a manager with a custom z-index baseline.
    ///
    /// The baseline is clamped to [`MAX_Z_INDEX`].
    pub fn with_baseline(windows: Vec<Window>, baseline: u32) -> Self {
        let baseline = baseline.min(MAX_Z_INDEX);
        let mut manager = Self {
            windows,
            active: None,
            highest_z: baseline,
            baseline,
            drag: None,
            taskbar: Vec::new(),
        };
        manager.render_taskbar();
        manager
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// All windows in declaration order
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// The active window id, if any
    pub fn active(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// Whether the given window is the active one
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|a| a == id)
    }

    /// Highest z-index handed out so far
    pub fn highest_z_index(&self) -> u32 {
        self.highest_z
    }

    /// Last rendered taskbar entries
    pub fn taskbar(&self) -> &[TaskbarEntry] {
        &self.taskbar
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        let idx = self.windows.iter().position(|w| w.id == id);
        if idx.is_none() {
            debug!(window = id, "ignoring command for unknown window");
        }
        idx
    }

    fn next_z(&mut self) -> u32 {
        self.highest_z = self.highest_z.saturating_add(1).min(MAX_Z_INDEX);
        self.highest_z
    }

    fn set_active(&mut self, idx: usize) {
        self.active = Some(self.windows[idx].id.clone());
    }

    fn clear_active_if(&mut self, idx: usize) {
        if self.active.as_ref() == Some(&self.windows[idx].id) {
            self.active = None;
        }
    }

    fn cancel_drag_on(&mut self, idx: usize) {
        if self.drag.as_ref().is_some_and(|d| d.window_id == self.windows[idx].id) {
            self.drag = None;
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open a window, or restore and raise it if it is already open
    pub fn open(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };

        let was_open = self.windows[idx].is_open();
        let z = self.next_z();
        let window = &mut self.windows[idx];
        window.state = WindowState::Open;
        window.z_index = z;
        self.set_active(idx);

        debug!(window = id, z_index = z, reopened = was_open, "open");
        self.render_taskbar();
    }

    /// Hide a window while keeping it open and listed in the taskbar
    pub fn minimize(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if !self.windows[idx].is_open() {
            return;
        }

        self.windows[idx].state = WindowState::Minimized;
        self.clear_active_if(idx);
        self.cancel_drag_on(idx);

        debug!(window = id, "minimize");
        self.render_taskbar();
    }

    /// Close a window. Closing a closed window is a no-op.
    pub fn close(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };

        self.windows[idx].state = WindowState::Closed;
        self.clear_active_if(idx);
        self.cancel_drag_on(idx);

        debug!(window = id, "close");
        self.render_taskbar();
    }

    /// Activate an open window and raise it above every other window.
    ///
    /// The new z-index is one above the highest z-index currently held by
    /// any window (never below the baseline). Focusing a minimized window
    /// restores it.
    pub fn focus(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if !self.windows[idx].is_open() {
            return;
        }

        let max_z = self
            .windows
            .iter()
            .map(|w| w.z_index)
            .fold(self.baseline, u32::max);
        let z = max_z.saturating_add(1).min(MAX_Z_INDEX);
        self.highest_z = self.highest_z.max(z);

        let was_minimized = self.windows[idx].is_minimized();
        let changed = !self.is_active(id) || was_minimized;

        let window = &mut self.windows[idx];
        window.z_index = z;
        window.state = WindowState::Open;
        self.set_active(idx);

        debug!(window = id, z_index = z, "focus");
        if changed {
            self.render_taskbar();
        }
    }

    /// Rebuild the taskbar from the window set
    pub fn render_taskbar(&mut self) -> &[TaskbarEntry] {
        self.taskbar = taskbar::project(&self.windows, self.active.as_ref());
        &self.taskbar
    }

    /// Handle a click on a taskbar entry.
    ///
    /// The active window minimizes; any other open window is restored and
    /// brought to the front.
    pub fn taskbar_entry_clicked(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if !self.windows[idx].is_open() {
            return;
        }

        if self.is_active(id) && !self.windows[idx].is_minimized() {
            self.minimize(id);
            return;
        }

        let z = self.next_z();
        let window = &mut self.windows[idx];
        window.state = WindowState::Open;
        window.z_index = z;
        self.set_active(idx);

        debug!(window = id, z_index = z, "restore from taskbar");
        self.render_taskbar();
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start dragging a window by its title bar.
    ///
    /// Grabbing brings the window to the front and activates it. Closed or
    /// minimized windows cannot be grabbed. Returns whether a gesture started.
    pub fn begin_drag(&mut self, id: &str, pointer: Vec2) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if self.windows[idx].state != WindowState::Open {
            return false;
        }

        let z = self.next_z();
        self.windows[idx].z_index = z;
        if !self.is_active(id) {
            self.set_active(idx);
            self.render_taskbar();
        }

        self.drag = Some(DragState::new(
            self.windows[idx].id.clone(),
            pointer,
            self.windows[idx].position,
        ));
        debug!(window = id, z_index = z, "drag start");
        true
    }

    /// Move the dragged window to follow the pointer
    pub fn drag_to(&mut self, pointer: Vec2) {
        let Some(drag) = self.drag.as_ref() else {
            return;
        };
        let delta = drag.delta(pointer);
        let id = drag.window_id.clone();
        self.drag(id.as_str(), delta.x, delta.y);
    }

    /// Offset a window by `(dx, dy)` from where the current gesture started.
    ///
    /// Without a gesture on this window one is started first, which focuses
    /// the window.
    pub fn drag(&mut self, id: &str, dx: f32, dy: f32) {
        let grabbed = self.drag.as_ref().is_some_and(|d| d.window_id == id);
        if !grabbed && !self.begin_drag(id, Vec2::ZERO) {
            return;
        }
        let Some(drag) = self.drag.as_ref() else {
            return;
        };

        let position = drag.position_for(Vec2::new(dx, dy));
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == id) {
            window.position = position;
        }
    }

    /// Finish the current gesture
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(window = %drag.window_id, "drag end");
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::window::Icon;
    use proptest::prelude::*;

    const IDS: [&str; 4] = ["main", "about", "projects", "contact"];

    #[derive(Clone, Debug)]
    enum Op {
        Open(usize),
        Close(usize),
        Minimize(usize),
        Focus(usize),
        TaskbarClick(usize),
        Drag(usize, f32, f32),
        EndDrag,
    }

    fn op() -> impl Strategy<Value = Op> {
        let idx = 0..IDS.len() + 1;
        prop_oneof![
            idx.clone().prop_map(Op::Open),
            idx.clone().prop_map(Op::Close),
            idx.clone().prop_map(Op::Minimize),
            idx.clone().prop_map(Op::Focus),
            idx.clone().prop_map(Op::TaskbarClick),
            (idx, -50.0f32..50.0, -50.0f32..50.0).prop_map(|(i, dx, dy)| Op::Drag(i, dx, dy)),
            Just(Op::EndDrag),
        ]
    }

    fn id(i: usize) -> &'static str {
        // Index past the end exercises the unknown-id path
        IDS.get(i).copied().unwrap_or("missing")
    }

    fn apply(wm: &mut WindowManager, op: &Op) {
        match *op {
            Op::Open(i) => wm.open(id(i)),
            Op::Close(i) => wm.close(id(i)),
            Op::Minimize(i) => wm.minimize(id(i)),
            Op::Focus(i) => wm.focus(id(i)),
            Op::TaskbarClick(i) => wm.taskbar_entry_clicked(id(i)),
            Op::Drag(i, dx, dy) => wm.drag(id(i), dx, dy),
            Op::EndDrag => wm.end_drag(),
        }
    }

    proptest! {
        /// The active window is always open and never minimized
        #[test]
        fn active_window_is_open_and_visible(ops in prop::collection::vec(op(), 0..64)) {
            let mut wm = WindowManager::new(
                IDS.iter().map(|i| Window::new(WindowId::from(*i), *i, Icon::default())).collect(),
            );
            for op in &ops {
                apply(&mut wm, op);
                if let Some(active) = wm.active() {
                    let w = wm.get(active.as_str()).unwrap();
                    prop_assert_eq!(w.state, WindowState::Open);
                }
                let active_entries = wm.taskbar().iter().filter(|e| e.active).count();
                prop_assert!(active_entries <= 1);
                for entry in wm.taskbar() {
                    let id = entry.window_id.as_str();
                    let minimized = wm.get(id).unwrap().is_minimized();
                    prop_assert_eq!(entry.minimized, minimized);
                    prop_assert_eq!(entry.active, wm.is_active(id) && !minimized);
                }
                if let Some(drag) = &wm.drag {
                    let w = wm.get(drag.window_id.as_str()).unwrap();
                    prop_assert_eq!(w.state, WindowState::Open);
                }
            }
        }

        /// The taskbar always lists exactly the open windows
        #[test]
        fn taskbar_matches_open_windows(ops in prop::collection::vec(op(), 0..64)) {
            let mut wm = WindowManager::new(
                IDS.iter().map(|i| Window::new(WindowId::from(*i), *i, Icon::default())).collect(),
            );
            for op in &ops {
                apply(&mut wm, op);
                let listed: Vec<&str> = wm.taskbar().iter().map(|e| e.window_id.as_str()).collect();
                let open: Vec<&str> = wm
                    .windows()
                    .iter()
                    .filter(|w| w.is_open())
                    .map(|w| w.id.as_str())
                    .collect();
                prop_assert_eq!(listed, open);
            }
        }

        /// The z-index counter never decreases
        #[test]
        fn highest_z_never_decreases(ops in prop::collection::vec(op(), 0..64)) {
            let mut wm = WindowManager::new(
                IDS.iter().map(|i| Window::new(WindowId::from(*i), *i, Icon::default())).collect(),
            );
            let mut last = wm.highest_z_index();
            for op in &ops {
                apply(&mut wm, op);
                prop_assert!(wm.highest_z_index() >= last);
                last = wm.highest_z_index();
            }
        }
    }
}
