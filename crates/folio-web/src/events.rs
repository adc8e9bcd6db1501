//! DOM listener wiring
//!
//! Every listener turns its event into an [`InputEvent`] and hands it to the
//! shared [`App`]. Listeners live as long as the page, so their closures are
//! leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{ClockReading, CopyButton, InputEvent, InputResult, KeyPress, WindowId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{clipboard, describe, dom, log, App};

/// Timers can fire a frame before the requested delay
const TIMER_SLACK_MS: f64 = 16.0;

/// Register `handler` for `kind` events on `target` for the page lifetime
pub(crate) fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn millis(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Client coordinates of a mouse event or the first touch point
fn pointer_position(event: &web_sys::Event) -> Option<(f32, f32)> {
    if let Some(touch_event) = event.dyn_ref::<web_sys::TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        return Some((touch.client_x() as f32, touch.client_y() as f32));
    }
    event
        .dyn_ref::<web_sys::MouseEvent>()
        .map(|mouse| (mouse.client_x() as f32, mouse.client_y() as f32))
}

/// Install every listener and start the clock
pub(crate) fn install(app: &Rc<App>) -> Result<(), JsValue> {
    install_window_controls(app)?;
    install_pointer_tracking(app)?;
    install_desktop_icons(app)?;
    install_taskbar(app)?;
    install_start_menu(app)?;
    install_keyboard(app)?;
    install_copy_buttons(app)?;
    start_clock(app)
}

fn install_window_controls(app: &Rc<App>) -> Result<(), JsValue> {
    for spec in &app.config.windows {
        let Some(element) = app
            .document
            .get_element_by_id(&dom::window_element_id(spec.id.as_str()))
        else {
            continue;
        };

        let buttons: [(&str, fn(WindowId) -> InputEvent); 2] = [
            (".window-btn.close", InputEvent::CloseButton),
            (".window-btn.minimize", InputEvent::MinimizeButton),
        ];
        for (selector, command) in buttons {
            if let Some(button) = element.query_selector(selector)? {
                let app = app.clone();
                let id = spec.id.clone();
                listen(&button, "click", move |event| {
                    event.stop_propagation();
                    app.dispatch(command(id.clone()));
                })?;
            }
        }

        for kind in ["mousedown", "touchstart"] {
            let app = app.clone();
            let id = spec.id.clone();
            listen(&element, kind, move |event| {
                let Some(target) = dom::event_element(&event) else {
                    return;
                };
                if target.closest(".window-btn").ok().flatten().is_some() {
                    return;
                }

                let on_header = target.closest(".window-header").ok().flatten().is_some();
                if !on_header {
                    app.dispatch(InputEvent::WindowPointerDown(id.clone()));
                    return;
                }
                if let Some((x, y)) = pointer_position(&event) {
                    app.dispatch(InputEvent::HeaderPointerDown {
                        id: id.clone(),
                        x,
                        y,
                    });
                }
            })?;
        }
    }
    Ok(())
}

fn install_pointer_tracking(app: &Rc<App>) -> Result<(), JsValue> {
    for kind in ["mousemove", "touchmove"] {
        let app_ref = app.clone();
        listen(&app.document, kind, move |event| {
            let Some((x, y)) = pointer_position(&event) else {
                return;
            };
            if app_ref.dispatch(InputEvent::PointerMove { x, y }) == InputResult::PreventDefault {
                event.prevent_default();
            }
        })?;
    }

    for kind in ["mouseup", "touchend"] {
        let app_ref = app.clone();
        listen(&app.document, kind, move |_| {
            app_ref.dispatch(InputEvent::PointerUp);
        })?;
    }
    Ok(())
}

fn install_desktop_icons(app: &Rc<App>) -> Result<(), JsValue> {
    for icon in dom::query_all(&app.document, ".desktop-icon")? {
        let Some(name) = icon.get_attribute("data-window") else {
            continue;
        };
        let id = WindowId::from(name);

        let (app_ref, icon_id) = (app.clone(), id.clone());
        listen(&icon, "click", move |_| {
            app_ref.dispatch(InputEvent::DesktopIconClicked(icon_id.clone()));
        })?;

        let app_ref = app.clone();
        listen(&icon, "dblclick", move |_| {
            app_ref.dispatch(InputEvent::DesktopIconDoubleClicked(id.clone()));
        })?;
    }
    Ok(())
}

/// One delegated listener; task elements are rebuilt on every render.
fn install_taskbar(app: &Rc<App>) -> Result<(), JsValue> {
    let Some(container) = app.document.query_selector(".taskbar-tasks")? else {
        return Ok(());
    };
    let app = app.clone();
    listen(&container, "click", move |event| {
        let task = dom::event_element(&event).and_then(|el| el.closest(".task").ok().flatten());
        let Some(task) = task else {
            return;
        };
        if let Some(name) = dom::data_window(&task) {
            app.dispatch(InputEvent::TaskbarEntryClicked(WindowId::from(name)));
        }
    })
}

fn install_start_menu(app: &Rc<App>) -> Result<(), JsValue> {
    let start_button = app.document.query_selector(".start-btn")?;
    let menu = app.document.get_element_by_id("startMenu");
    let (Some(start_button), Some(menu)) = (start_button, menu) else {
        return Ok(());
    };

    let app_ref = app.clone();
    listen(&start_button, "click", move |event| {
        event.stop_propagation();
        app_ref.dispatch(InputEvent::StartButtonClicked);
    })?;

    {
        let app_ref = app.clone();
        let (menu, start_button) = (menu.clone(), start_button.clone());
        listen(&app.document, "click", move |event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside_start_menu =
                menu.contains(target.as_ref()) || start_button.contains(target.as_ref());
            app_ref.dispatch(InputEvent::DocumentClicked { inside_start_menu });
        })?;
    }

    for item in dom::query_all(&app.document, "#startMenu .start-menu-item[data-window]")? {
        let Some(name) = item.get_attribute("data-window") else {
            continue;
        };
        let app_ref = app.clone();
        let id = WindowId::from(name);
        listen(&item, "click", move |_| {
            app_ref.dispatch(InputEvent::StartMenuItemClicked(id.clone()));
        })?;
    }
    Ok(())
}

fn install_keyboard(app: &Rc<App>) -> Result<(), JsValue> {
    if let Some(toggle) = app.document.get_element_by_id("themeToggle") {
        let app_ref = app.clone();
        listen(&toggle, "click", move |_| {
            app_ref.dispatch(InputEvent::ThemeToggleClicked);
        })?;
    }

    let app_ref = app.clone();
    listen(&app.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        let press = KeyPress {
            key: key.key(),
            alt: key.alt_key(),
            ctrl: key.ctrl_key(),
            shift: key.shift_key(),
            meta: key.meta_key(),
        };
        if app_ref.dispatch(InputEvent::KeyDown(press)) == InputResult::PreventDefault {
            event.prevent_default();
        }
    })
}

fn show_copy_feedback(element: &web_sys::Element, button: &CopyButton) {
    if let Err(e) = dom::render_copy_button(element, button.label(), button.highlighted()) {
        log(&format!("[folio] copy feedback: {}", describe(&e)));
    }
}

fn install_copy_buttons(app: &Rc<App>) -> Result<(), JsValue> {
    for element in dom::query_all(&app.document, ".copy-btn")? {
        let label = element.text_content().unwrap_or_default();
        let text = element
            .get_attribute("data-copy")
            .unwrap_or_else(|| app.config.default_copy_text.clone());
        let button = Rc::new(RefCell::new(
            CopyButton::new(label, Some(text)).with_feedback_ms(app.config.copy_feedback_ms),
        ));

        let app_ref = app.clone();
        let trigger = element.clone();
        listen(&element, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();

            let (app, button, element) = (app_ref.clone(), button.clone(), trigger.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let text = button.borrow().text().to_string();
                let outcome = clipboard::copy_text(&app.window, &app.document, &text).await;

                button.borrow_mut().copied(outcome, js_sys::Date::now());
                show_copy_feedback(&element, &button.borrow());

                let feedback_ms = button.borrow().feedback_ms();
                let revert = Closure::once_into_js(move || {
                    if button.borrow_mut().tick(js_sys::Date::now() + TIMER_SLACK_MS) {
                        show_copy_feedback(&element, &button.borrow());
                    }
                });
                if let Err(e) = app.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    revert.unchecked_ref(),
                    millis(feedback_ms),
                ) {
                    log(&format!("[folio] copy revert timer: {}", describe(&e)));
                }
            });
        })?;
    }
    Ok(())
}

fn start_clock(app: &Rc<App>) -> Result<(), JsValue> {
    let document = app.document.clone();
    let tick = move || {
        let now = js_sys::Date::new_0();
        let reading = ClockReading::new(now.get_hours(), now.get_minutes(), now.get_seconds());

        if let Some(el) = document.get_element_by_id("taskbarTime") {
            el.set_text_content(Some(&reading.taskbar_label()));
        }
        if let Some(el) = document.get_element_by_id("systemTime") {
            el.set_text_content(Some(&reading.detail_label()));
        }
    };

    tick();
    let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    app.window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis(app.config.clock_interval_ms),
        )?;
    closure.forget();
    Ok(())
}
