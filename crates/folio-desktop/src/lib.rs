//! Desktop core for the Folio portfolio site
//!
//! The site presents itself as a small desktop: windows that open, close,
//! minimize and drag, a taskbar, a start menu, a theme toggle, a clock, a
//! copy-to-clipboard control and a few scroll effects. This crate holds all
//! of that state as plain Rust, with no browser dependency, so it can be
//! tested on the host. `folio-web` binds it to the DOM.
//!
//! ## Architecture
//!
//! - [`window`]: window records, the [`WindowManager`], taskbar projection
//!   and drag gesture
//! - [`shell`]: [`DesktopShell`], which owns every piece of state and turns
//!   [`InputEvent`]s into window-manager commands
//! - [`theme`]: light/dark theme and its [`PreferenceStore`]
//! - [`clipboard`]: copy with a single fallback and per-button feedback
//! - [`clock`]: clock labels
//! - [`effects`]: reveal-on-scroll, parallax and navbar tint
//! - [`config`]: window declarations and tunables
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{
//!     DesktopConfig, DesktopShell, Icon, InputEvent, MemoryStore, WindowId, WindowSpec,
//! };
//!
//! let config = DesktopConfig::with_windows(vec![
//!     WindowSpec::new("main", "aaron@folio: ~", Icon::default()),
//!     WindowSpec::new("about", "about.md", Icon::default()),
//! ]);
//! let mut shell = DesktopShell::new(&config, MemoryStore::new(), None).unwrap();
//!
//! shell.dispatch(InputEvent::DesktopIconClicked(WindowId::from("about")));
//! assert!(shell.windows.is_active("about"));
//! assert_eq!(shell.windows.taskbar().len(), 2);
//! ```

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod effects;
pub mod shell;
pub mod theme;
pub mod window;

mod error;
mod types;

pub use clipboard::{
    copy_with_fallback, finish_copy, ClipboardSink, CopyButton, CopyOutcome, COPIED_LABEL,
    COPY_FEEDBACK_MS, DEFAULT_COPY_TEXT,
};
pub use clock::{ClockReading, CLOCK_INTERVAL_MS};
pub use config::{DesktopConfig, WindowSpec};
pub use effects::{navbar_tinted, parallax_offset, RevealTracker};
pub use error::{DesktopError, DesktopResult};
pub use shell::{DesktopShell, InputEvent, InputResult, KeyPress, StartMenu};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController, THEME_KEY};
pub use types::{Vec2, WindowId};
pub use window::{
    Icon, TaskbarEntry, Window, WindowManager, WindowState, MAX_Z_INDEX, Z_INDEX_BASELINE,
};
