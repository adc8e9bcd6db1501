//! Window management module
//!
//! Provides window lifecycle, focus, z-order, dragging and the taskbar
//! projection.

mod drag;
mod manager;
mod taskbar;
#[allow(clippy::module_inception)]
mod window;

pub use manager::{WindowManager, MAX_Z_INDEX, Z_INDEX_BASELINE};
pub use taskbar::TaskbarEntry;
pub use window::{Icon, Window, WindowState, DEFAULT_ICON_GLYPH};
