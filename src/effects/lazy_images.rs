//! Lazy image fade-in
//!
//! Images the browser loads on demand start transparent and fade in when
//! their `load` event fires. Images already complete at install time (cache
//! hits) are set visible immediately since `load` may never fire for them.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlImageElement};

use crate::Settings;
use crate::consts::LAZY_FADE_MS;
use crate::dom;

pub fn install(document: &Document, settings: &Settings) {
    if !settings.lazy_fade {
        return;
    }

    let images = dom::query_all(document, r#"img[loading="lazy"]"#);
    if images.is_empty() {
        return;
    }

    // One shared listener; the event target tells us which image finished
    let on_load = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(img) = target.dyn_into::<Element>() else {
            return;
        };
        dom::set_style(&img, "opacity", "1");
    });

    let mut pending = 0usize;
    for el in &images {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            continue;
        };
        dom::set_style(el, "transition", &format!("opacity {LAZY_FADE_MS}ms ease-in"));
        if img.complete() {
            dom::set_style(el, "opacity", "1");
            continue;
        }
        dom::set_style(el, "opacity", "0");
        let _ = img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        pending += 1;
    }
    on_load.forget();

    log::debug!("Fading in {pending} lazy images");
}
