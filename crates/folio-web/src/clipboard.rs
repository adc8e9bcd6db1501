//! Browser clipboard access
//!
//! The async Clipboard API is the primary path. When it is missing or
//! rejects, a hidden textarea is selected and `execCommand("copy")` runs
//! once.

use folio_desktop::{finish_copy, ClipboardSink, CopyOutcome, DesktopError, DesktopResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{describe, log};

fn clipboard_error(value: JsValue) -> DesktopError {
    DesktopError::Clipboard(describe(&value))
}

/// Write through `navigator.clipboard.writeText`.
///
/// Looked up reflectively: insecure contexts have no `navigator.clipboard`.
pub async fn write_primary(window: &web_sys::Window, text: &str) -> DesktopResult<()> {
    let navigator = window.navigator();
    let clipboard =
        js_sys::Reflect::get(navigator.as_ref(), &"clipboard".into()).map_err(clipboard_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(DesktopError::Clipboard(
            "navigator.clipboard unavailable".to_string(),
        ));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .map_err(clipboard_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(clipboard_error)?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(clipboard_error)?
        .dyn_into::<js_sys::Promise>()
        .map_err(clipboard_error)?;

    JsFuture::from(promise).await.map_err(clipboard_error)?;
    Ok(())
}

/// Hidden-textarea copy via `document.execCommand("copy")`
pub struct ExecCommandClipboard {
    document: web_sys::Document,
}

impl ExecCommandClipboard {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl ClipboardSink for ExecCommandClipboard {
    fn write_text(&mut self, text: &str) -> DesktopResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| DesktopError::Clipboard("document has no body".to_string()))?;
        let textarea = self
            .document
            .create_element("textarea")
            .map_err(clipboard_error)?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|e| clipboard_error(e.into()))?;
        textarea.set_value(text);

        body.append_child(&textarea).map_err(clipboard_error)?;
        textarea.select();
        let copied = self
            .document
            .clone()
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|e| clipboard_error(e.into()))
            .and_then(|doc| doc.exec_command("copy").map_err(clipboard_error));
        let _ = body.remove_child(&textarea);

        match copied? {
            true => Ok(()),
            false => Err(DesktopError::Clipboard("copy command refused".to_string())),
        }
    }
}

/// Copy `text`, falling back to the textarea path once.
pub async fn copy_text(
    window: &web_sys::Window,
    document: &web_sys::Document,
    text: &str,
) -> CopyOutcome {
    let primary = write_primary(window, text).await;
    if let Err(e) = &primary {
        log(&format!("[folio] clipboard: {}, using fallback", e));
    }
    finish_copy(primary, &mut ExecCommandClipboard::new(document.clone()), text)
}
