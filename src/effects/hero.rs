//! Hero parallax
//!
//! A passive scroll listener schedules style updates through `FrameLatch`,
//! so a scroll burst costs at most one animation-frame callback per frame.
//! The callback reads the live scroll offset rather than the event's, which
//! keeps the hero glued to wherever the page actually is when it renders.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event};

use crate::Settings;
use crate::consts::PARALLAX_RATE;
use crate::dom;
use crate::motion::{FrameLatch, parallax_offset};

pub fn install(document: &Document, settings: &Settings) {
    if !settings.effective_parallax() {
        return;
    }

    let Ok(Some(hero)) = document.query_selector(".hero") else {
        log::debug!("No hero element, parallax disabled");
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let latch = Rc::new(FrameLatch::new());

    let w = window.clone();
    let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if !latch.try_acquire() {
            return;
        }
        let latch = latch.clone();
        let hero = hero.clone();
        let ww = w.clone();
        let frame = Closure::once(move |_now: f64| {
            apply(&hero, dom::scroll_y(&ww));
            latch.release();
        });
        let _ = w.request_animation_frame(frame.as_ref().unchecked_ref());
        frame.forget();
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    );
    on_scroll.forget();

    log::debug!("Hero parallax active");
}

fn apply(hero: &Element, scroll_y: f64) {
    let offset = parallax_offset(scroll_y, PARALLAX_RATE);
    dom::set_style(hero, "transform", &format!("translateY({offset:.2}px)"));
}
