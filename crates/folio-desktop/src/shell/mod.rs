//! Desktop shell and input dispatch
//!
//! [`DesktopShell`] is the single owner of desktop state. The host turns
//! raw DOM events into [`InputEvent`]s and calls [`DesktopShell::dispatch`];
//! each dispatch runs to completion (taskbar included) before the host
//! renders. The shell never registers listeners of its own.

mod start_menu;

pub use start_menu::StartMenu;

use tracing::debug;

use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::theme::{PreferenceStore, Theme, ThemeController};
use crate::types::{Vec2, WindowId};
use crate::window::WindowManager;

/// Key that closes the active window
pub const CLOSE_WINDOW_KEY: &str = "Escape";

/// Key that toggles the theme when pressed with Alt
pub const THEME_TOGGLE_KEY: &str = "t";

/// A keydown with its modifier flags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyPress {
    /// A key with no modifiers held
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    /// A key with Alt held
    pub fn alt(key: &str) -> Self {
        Self {
            key: key.to_string(),
            alt: true,
            ..Default::default()
        }
    }
}

/// Input events understood by the shell
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    DesktopIconClicked(WindowId),
    DesktopIconDoubleClicked(WindowId),
    CloseButton(WindowId),
    MinimizeButton(WindowId),
    TaskbarEntryClicked(WindowId),
    /// Press anywhere on a window outside its title bar
    WindowPointerDown(WindowId),
    /// Press on a window's title bar, starting a drag
    HeaderPointerDown { id: WindowId, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    StartButtonClicked,
    /// Any click on the document; `inside_start_menu` covers the menu and
    /// its button
    DocumentClicked { inside_start_menu: bool },
    StartMenuItemClicked(WindowId),
    ThemeToggleClicked,
    KeyDown(KeyPress),
}

/// What the host should do with the original event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The shell ignored the event
    Unhandled,
    /// The shell consumed the event
    Handled,
    /// The shell consumed the event and the browser default must be suppressed
    PreventDefault,
}

/// Desktop state owner: windows, start menu, icon selection and theme
pub struct DesktopShell<S: PreferenceStore> {
    pub windows: WindowManager,
    start_menu: StartMenu,
    selected_icon: Option<WindowId>,
    theme: ThemeController<S>,
}

impl<S: PreferenceStore> DesktopShell<S> {
    /// Build the shell from a validated config and open the initial window
    pub fn new(
        config: &DesktopConfig,
        store: S,
        system_hint: Option<Theme>,
    ) -> DesktopResult<Self> {
        config.validate()?;

        let windows = WindowManager::with_baseline(config.build_windows(), config.z_index_baseline);
        let theme = ThemeController::load(
            store,
            &config.theme_key,
            system_hint,
            config.default_theme,
        );

        let mut shell = Self {
            windows,
            start_menu: StartMenu::default(),
            selected_icon: None,
            theme,
        };

        if let Some(initial) = &config.initial_window {
            shell.windows.open(initial.as_str());
        }

        Ok(shell)
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    /// Desktop icon currently highlighted
    pub fn selected_icon(&self) -> Option<&WindowId> {
        self.selected_icon.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn theme_controller(&self) -> &ThemeController<S> {
        &self.theme
    }

    fn open_from_icon(&mut self, id: &WindowId) {
        self.windows.open(id.as_str());
        self.selected_icon = Some(id.clone());
    }

    /// Apply one input event
    pub fn dispatch(&mut self, event: InputEvent) -> InputResult {
        match event {
            InputEvent::DesktopIconClicked(id) => {
                self.open_from_icon(&id);
                InputResult::Handled
            }
            InputEvent::DesktopIconDoubleClicked(id) => {
                self.windows.open(id.as_str());
                InputResult::Handled
            }
            InputEvent::CloseButton(id) => {
                self.windows.close(id.as_str());
                InputResult::Handled
            }
            InputEvent::MinimizeButton(id) => {
                self.windows.minimize(id.as_str());
                InputResult::Handled
            }
            InputEvent::TaskbarEntryClicked(id) => {
                self.windows.taskbar_entry_clicked(id.as_str());
                InputResult::Handled
            }
            InputEvent::WindowPointerDown(id) => {
                self.windows.focus(id.as_str());
                InputResult::Handled
            }
            InputEvent::HeaderPointerDown { id, x, y } => {
                if self.windows.begin_drag(id.as_str(), Vec2::new(x, y)) {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
            InputEvent::PointerMove { x, y } => {
                if !self.windows.is_dragging() {
                    return InputResult::Unhandled;
                }
                self.windows.drag_to(Vec2::new(x, y));
                InputResult::PreventDefault
            }
            InputEvent::PointerUp => {
                if !self.windows.is_dragging() {
                    return InputResult::Unhandled;
                }
                self.windows.end_drag();
                InputResult::Handled
            }
            InputEvent::StartButtonClicked => {
                self.start_menu.toggle();
                InputResult::Handled
            }
            InputEvent::DocumentClicked { inside_start_menu } => {
                if inside_start_menu || !self.start_menu.is_open() {
                    return InputResult::Unhandled;
                }
                self.start_menu.close();
                InputResult::Handled
            }
            InputEvent::StartMenuItemClicked(id) => {
                self.open_from_icon(&id);
                self.start_menu.close();
                InputResult::Handled
            }
            InputEvent::ThemeToggleClicked => {
                self.theme.toggle();
                InputResult::Handled
            }
            InputEvent::KeyDown(key) => self.handle_key(&key),
        }
    }

    fn handle_key(&mut self, key: &KeyPress) -> InputResult {
        if key.alt && key.key == THEME_TOGGLE_KEY {
            self.theme.toggle();
            return InputResult::PreventDefault;
        }

        if key.key == CLOSE_WINDOW_KEY {
            let Some(active) = self.windows.active().cloned() else {
                debug!("escape with no active window");
                return InputResult::Unhandled;
            };
            self.windows.close(active.as_str());
            return InputResult::Handled;
        }

        InputResult::Unhandled
    }
}
