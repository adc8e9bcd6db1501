//! Browser front end for the Folio desktop
//!
//! Binds [`folio_desktop::DesktopShell`] to the page. The page declares the
//! windows (`.window` panels with `data-window` names); every DOM listener
//! translates its event into an [`InputEvent`], dispatches it, and the whole
//! desktop is re-rendered from shell state.
//!
//! ## Usage
//!
//! ```text
//! import init, { FolioDesktop } from "./pkg/folio_web.js";
//! await init();
//! const desktop = new FolioDesktop();
//! ```
//!
//! An optional `<script id="folio-config" type="application/json">` block
//! overrides [`DesktopConfig`] defaults.

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{DesktopConfig, DesktopShell, InputEvent, InputResult};
use wasm_bindgen::prelude::*;

mod clipboard;
mod dom;
mod effects;
mod events;
mod storage;

pub use storage::{system_theme_hint, LocalStorageStore};

/// Element holding optional JSON configuration
const CONFIG_ELEMENT_ID: &str = "folio-config";

pub(crate) type Shell = DesktopShell<LocalStorageStore>;

/// Log to the browser console
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Human-readable form of a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Page handles plus the shell, shared by every listener
pub(crate) struct App {
    pub window: web_sys::Window,
    pub document: web_sys::Document,
    pub config: DesktopConfig,
    shell: RefCell<Shell>,
}

impl App {
    /// Dispatch one event and re-render if the shell consumed it
    pub fn dispatch(&self, event: InputEvent) -> InputResult {
        let result = self.shell.borrow_mut().dispatch(event);
        if result != InputResult::Unhandled {
            self.render();
        }
        result
    }

    pub fn render(&self) {
        if let Err(e) = dom::render(&self.document, &*self.shell.borrow()) {
            log(&format!("[folio] render failed: {}", describe(&e)));
        }
    }
}

/// Read configuration from the page, declaring windows from the DOM when
/// the configuration names none.
fn load_config(document: &web_sys::Document) -> Result<DesktopConfig, JsValue> {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let mut config = match inline {
        Some(json) => serde_json::from_str::<DesktopConfig>(&json).unwrap_or_else(|e| {
            log(&format!("[folio] ignoring invalid config: {}", e));
            DesktopConfig::default()
        }),
        None => DesktopConfig::default(),
    };

    if config.windows.is_empty() {
        config.windows = dom::declare_windows(document)?;
    }

    // Pages without the initial window simply start with nothing open
    let declared = |id: &folio_desktop::WindowId| config.windows.iter().any(|w| &w.id == id);
    if config.initial_window.as_ref().is_some_and(|id| !declared(id)) {
        config.initial_window = None;
    }

    Ok(config)
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Handle to the mounted desktop
#[wasm_bindgen]
pub struct FolioDesktop {
    app: Rc<App>,
}

#[wasm_bindgen]
impl FolioDesktop {
    /// Declare windows, restore the theme, wire listeners and render.
    #[wasm_bindgen(constructor)]
    pub fn mount() -> Result<FolioDesktop, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = load_config(&document)?;
        let store = LocalStorageStore::open(&window);
        let shell = DesktopShell::new(&config, store, system_theme_hint(&window))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log(&format!(
            "[folio] mounted {} windows, theme {}",
            config.windows.len(),
            shell.theme()
        ));

        let app = Rc::new(App {
            window,
            document,
            config,
            shell: RefCell::new(shell),
        });

        events::install(&app)?;
        effects::install(&app)?;
        app.render();

        Ok(FolioDesktop { app })
    }

    /// Open (or raise) a window by name
    pub fn open(&self, id: &str) {
        self.app.shell.borrow_mut().windows.open(id);
        self.app.render();
    }

    /// Close a window by name
    pub fn close(&self, id: &str) {
        self.app.shell.borrow_mut().windows.close(id);
        self.app.render();
    }

    /// Current theme name
    pub fn theme(&self) -> String {
        self.app.shell.borrow().theme().as_str().to_string()
    }

    /// Taskbar entries as JSON
    #[wasm_bindgen(js_name = taskbarJson)]
    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.app.shell.borrow().windows.taskbar())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
