//! Scroll-triggered section reveal
//!
//! Sections start transparent and shifted down; one IntersectionObserver
//! flips each to visible the first time it crosses the threshold, then
//! stops watching it. Scrolling back up never re-hides a section.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::Settings;
use crate::consts::{REVEAL_FADE_MS, REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;

pub fn install(document: &Document, settings: &Settings) {
    if !settings.effective_reveal() {
        // Sections keep their stylesheet visibility
        return;
    }

    let sections = dom::query_all(document, "section");
    if sections.is_empty() {
        log::debug!("No sections to reveal");
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                show(&target);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                return;
            }
        };
    callback.forget();

    for section in &sections {
        hide(section);
        observer.observe(section);
    }
    log::debug!("Revealing {} sections on scroll", sections.len());
}

fn hide(el: &Element) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", &format!("translateY({REVEAL_OFFSET_PX}px)"));
    dom::set_style(
        el,
        "transition",
        &format!("opacity {REVEAL_FADE_MS}ms ease-out, transform {REVEAL_FADE_MS}ms ease-out"),
    );
}

fn show(el: &Element) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
}
