//! Staggered social link load-in
//!
//! Links start hidden and pop in one at a time in document order, each on
//! its own one-shot timeout.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::Settings;
use crate::consts::{STAGGER_FADE_MS, STAGGER_OFFSET_PX};
use crate::dom;
use crate::motion::stagger_delay_ms;

pub fn install(document: &Document, settings: &Settings) {
    if !settings.effective_stagger() {
        // Nothing scheduled; links keep their stylesheet visibility
        return;
    }

    let links = dom::query_all(document, ".social-link");
    if links.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    for (index, link) in links.iter().enumerate() {
        dom::set_style(link, "opacity", "0");
        dom::set_style(link, "transform", &format!("translateY({STAGGER_OFFSET_PX}px)"));
        dom::set_style(
            link,
            "transition",
            &format!("opacity {STAGGER_FADE_MS}ms ease-out, transform {STAGGER_FADE_MS}ms ease-out"),
        );

        let el = link.clone();
        let reveal = Closure::once(move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        });
        let delay = stagger_delay_ms(index as u32) as i32;
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                reveal.as_ref().unchecked_ref(),
                delay,
            );
        reveal.forget();
    }

    log::debug!("Staggering {} social links", links.len());
}
