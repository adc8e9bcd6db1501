//! DOM reading and rendering
//!
//! The page declares the windows once; after that the DOM is only ever
//! written from shell state, never read back.

use folio_desktop::{DesktopShell, Icon, PreferenceStore, TaskbarEntry, Window, WindowSpec};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Window whose transform keeps its horizontal centring
const CENTRED_WINDOW_ID: &str = "main";

/// All elements matching `selector`, in document order
pub fn query_all(
    root: &web_sys::Document,
    selector: &str,
) -> Result<Vec<web_sys::Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect())
}

/// Element id of a window's panel
pub fn window_element_id(id: &str) -> String {
    format!("{}Window", id)
}

/// Element a DOM event was dispatched to
pub fn event_element(event: &web_sys::Event) -> Option<web_sys::Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

/// `data-window` of the element or its nearest ancestor that has one
pub fn data_window(element: &web_sys::Element) -> Option<String> {
    element
        .closest("[data-window]")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("data-window"))
}

fn text_of(element: &web_sys::Element, selector: &str) -> Option<String> {
    element
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn icon_of(element: &web_sys::Element) -> Icon {
    let Some(icon) = element.query_selector(".window-icon").ok().flatten() else {
        return Icon::default();
    };
    if let Some(img) = icon.query_selector("img").ok().flatten() {
        return Icon::Image {
            src: img.get_attribute("src").unwrap_or_default(),
            alt: img.get_attribute("alt").unwrap_or_default(),
        };
    }
    match icon.text_content().map(|t| t.trim().to_string()) {
        Some(text) if !text.is_empty() => Icon::Glyph { text },
        _ => Icon::default(),
    }
}

/// Declare windows from the `.window` panels in the page
pub fn declare_windows(document: &web_sys::Document) -> Result<Vec<WindowSpec>, JsValue> {
    let mut specs = Vec::new();
    for element in query_all(document, ".window")? {
        let id = match element.get_attribute("data-window") {
            Some(id) => id,
            None => match element.id().strip_suffix("Window") {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => continue,
            },
        };
        let title =
            text_of(&element, ".window-title span:last-child").unwrap_or_else(|| id.clone());
        specs.push(WindowSpec::new(&id, &title, icon_of(&element)));
    }
    Ok(specs)
}

/// Add or remove a class
pub fn set_class(element: &web_sys::Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Set an inline style property, or remove it with `None`
pub fn set_style(
    element: &web_sys::Element,
    name: &str,
    value: Option<&str>,
) -> Result<(), JsValue> {
    let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return Ok(());
    };
    match value {
        Some(value) => html.style().set_property(name, value),
        None => html.style().remove_property(name).map(|_| ()),
    }
}

fn render_window<S: PreferenceStore>(
    document: &web_sys::Document,
    shell: &DesktopShell<S>,
    window: &Window,
) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(&window_element_id(window.id.as_str())) else {
        return Ok(());
    };

    set_class(&element, "open", window.is_open())?;
    set_class(&element, "minimized", window.is_minimized())?;
    set_class(&element, "active", shell.windows.is_active(window.id.as_str()))?;

    if window.z_index > 0 {
        set_style(&element, "z-index", Some(&window.z_index.to_string()))?;
    }

    let translate = format!("translate({}px, {}px)", window.position.x, window.position.y);
    let transform = if window.id == CENTRED_WINDOW_ID {
        format!("translateX(-50%) {}", translate)
    } else {
        translate
    };
    set_style(&element, "transform", Some(&transform))
}

fn task_element(
    document: &web_sys::Document,
    entry: &TaskbarEntry,
) -> Result<web_sys::Element, JsValue> {
    let task = document.create_element("div")?;
    task.set_class_name("task");
    set_class(&task, "active", entry.active)?;
    set_class(&task, "minimized", entry.minimized)?;
    task.set_attribute("data-window", entry.window_id.as_str())?;

    let icon = document.create_element("span")?;
    icon.set_class_name("task-icon");
    match &entry.icon {
        Icon::Image { src, alt } => {
            let img = document.create_element("img")?;
            img.set_attribute("src", src)?;
            img.set_attribute("alt", alt)?;
            icon.append_child(&img)?;
        }
        Icon::Glyph { text } => icon.set_text_content(Some(text)),
    }

    let label = document.create_element("span")?;
    label.set_class_name("task-label");
    label.set_text_content(Some(&entry.label));

    task.append_child(&icon)?;
    task.append_child(&label)?;
    Ok(task)
}

/// Rebuild `.taskbar-tasks` from scratch
pub fn render_taskbar(
    document: &web_sys::Document,
    entries: &[TaskbarEntry],
) -> Result<(), JsValue> {
    let Some(container) = document.query_selector(".taskbar-tasks")? else {
        return Ok(());
    };
    container.set_inner_html("");
    for entry in entries {
        let task = task_element(document, entry)?;
        container.append_child(&task)?;
    }
    Ok(())
}

/// Write the whole shell state into the page
pub fn render<S: PreferenceStore>(
    document: &web_sys::Document,
    shell: &DesktopShell<S>,
) -> Result<(), JsValue> {
    if let Some(root) = document.document_element() {
        root.set_attribute("data-theme", shell.theme().as_str())?;
    }

    for window in shell.windows.windows() {
        render_window(document, shell, window)?;
    }
    render_taskbar(document, shell.windows.taskbar())?;

    if let Some(menu) = document.get_element_by_id("startMenu") {
        set_class(&menu, "open", shell.start_menu().is_open())?;
    }

    let selected = shell.selected_icon();
    for icon in query_all(document, ".desktop-icon")? {
        let id = icon.get_attribute("data-window");
        let on = matches!((selected, id.as_deref()), (Some(s), Some(id)) if s == id);
        set_class(&icon, "active", on)?;
    }

    Ok(())
}

/// Show or clear copy feedback on a `.copy-btn`
pub fn render_copy_button(
    element: &web_sys::Element,
    label: &str,
    highlighted: bool,
) -> Result<(), JsValue> {
    element.set_text_content(Some(label));
    if highlighted {
        set_style(element, "background", Some("var(--accent-primary)"))?;
        set_style(element, "color", Some("var(--window-bg)"))
    } else {
        set_style(element, "background", None)?;
        set_style(element, "color", None)
    }
}
