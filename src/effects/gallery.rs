//! Photo grid hover
//!
//! Hovered photos scale up slightly and raise above their neighbors;
//! leaving restores the resting transform and clears the z-index override.
//! Both mutations are idempotent, so repeated enter/leave pairs are safe.

use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use crate::Settings;
use crate::consts::{HOVER_MS, HOVER_SCALE, HOVER_Z_INDEX};
use crate::dom;

pub fn install(document: &Document, settings: &Settings) {
    if !settings.hover_zoom {
        return;
    }

    let items = dom::query_all(document, ".photo-item");
    if items.is_empty() {
        return;
    }

    for item in &items {
        dom::set_style(item, "transition", &format!("transform {HOVER_MS}ms ease-out"));

        let el = item.clone();
        let on_enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            dom::set_style(&el, "transform", &format!("scale({HOVER_SCALE})"));
            dom::set_style(&el, "z-index", &HOVER_Z_INDEX.to_string());
        });
        let _ =
            item.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
        on_enter.forget();

        let el = item.clone();
        let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            dom::set_style(&el, "transform", "scale(1)");
            dom::clear_style(&el, "z-index");
        });
        let _ =
            item.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }

    log::debug!("Hover zoom on {} photo items", items.len());
}
