//! Scroll effects: reveal, parallax and navbar tint

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{navbar_tinted, parallax_offset, RevealTracker};
use wasm_bindgen::prelude::*;

use crate::events::listen;
use crate::{describe, dom, log, App};

const DEFAULT_PARALLAX_SPEED: f32 = 0.5;

struct ScrollEffects {
    reveal: Vec<web_sys::Element>,
    tracker: RevealTracker,
    parallax: Vec<(web_sys::Element, f32)>,
    navbar: Option<web_sys::Element>,
    tint_threshold: f32,
}

impl ScrollEffects {
    fn collect(app: &App) -> Result<Self, JsValue> {
        let reveal = dom::query_all(&app.document, ".reveal")?;
        let tracker = RevealTracker::with_offset(reveal.len(), app.config.reveal_offset_px);

        let parallax = dom::query_all(&app.document, "[data-parallax]")?
            .into_iter()
            .map(|el| {
                let speed = el
                    .get_attribute("data-parallax")
                    .and_then(|s| s.trim().parse::<f32>().ok())
                    .unwrap_or(DEFAULT_PARALLAX_SPEED);
                (el, speed)
            })
            .collect();

        Ok(Self {
            reveal,
            tracker,
            parallax,
            navbar: app.document.query_selector(".navbar")?,
            tint_threshold: app.config.navbar_tint_threshold,
        })
    }

    fn apply(&mut self, scroll_y: f32, viewport_height: f32) -> Result<(), JsValue> {
        let tops: Vec<f32> = self
            .reveal
            .iter()
            .map(|el| el.get_bounding_client_rect().top() as f32)
            .collect();
        for i in self.tracker.update(viewport_height, &tops) {
            dom::set_class(&self.reveal[i], "visible", true)?;
        }

        for (el, speed) in &self.parallax {
            let offset = parallax_offset(scroll_y, *speed);
            dom::set_style(el, "transform", Some(&format!("translateY({}px)", offset)))?;
        }

        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, "scrolled", navbar_tinted(scroll_y, self.tint_threshold))?;
        }
        Ok(())
    }
}

fn viewport(window: &web_sys::Window) -> (f32, f32) {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32;
    (scroll_y, height)
}

/// Apply effects once and again on every scroll
pub(crate) fn install(app: &Rc<App>) -> Result<(), JsValue> {
    let effects = Rc::new(RefCell::new(ScrollEffects::collect(app)?));

    let (scroll_y, height) = viewport(&app.window);
    effects.borrow_mut().apply(scroll_y, height)?;

    let window = app.window.clone();
    listen(&app.window, "scroll", move |_| {
        let (scroll_y, height) = viewport(&window);
        if let Err(e) = effects.borrow_mut().apply(scroll_y, height) {
            log(&format!("[folio] scroll effects: {}", describe(&e)));
        }
    })
}
