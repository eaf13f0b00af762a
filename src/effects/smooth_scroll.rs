//! Animated in-page anchor navigation
//!
//! Clicks on `a[href^="#"]` prevent the default jump and scroll to the
//! referenced element instead. Browsers with native `scroll-behavior`
//! support get a smooth `scrollTo`; everything else gets a frame-by-frame
//! loop with cubic ease-in-out over a fixed duration. Overlapping clicks
//! may run loops concurrently; each writes absolute positions and ends at
//! its own duration bound, so the last writer per frame wins.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::Settings;
use crate::consts::SCROLL_DURATION_MS;
use crate::dom;
use crate::motion::ScrollAnimation;

pub fn install(document: &Document, settings: &Settings) {
    if !settings.smooth_scroll {
        return;
    }

    let anchors = dom::query_all(document, r##"a[href^="#"]"##);
    if anchors.is_empty() {
        return;
    }

    let animate = settings.effective_smooth_scroll();
    let native = native_smooth_supported(document);

    for anchor in &anchors {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(target_y) = resolve_target_y(&window, &href) else {
                log::debug!("Anchor {href} has no target element");
                return;
            };
            if !animate {
                window.scroll_to_with_x_and_y(0.0, target_y);
            } else if native {
                scroll_native(&window, target_y);
            } else {
                start_fallback(&window, target_y);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::debug!("Smooth scrolling {} anchors (native: {native})", anchors.len());
}

/// Page offset of the element an anchor fragment points at
///
/// Bare `#` means the top of the page; an unknown id yields `None`.
fn resolve_target_y(window: &Window, href: &str) -> Option<f64> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return Some(0.0);
    }
    let target = window.document()?.get_element_by_id(fragment)?;
    let rect = target.get_bounding_client_rect();
    Some((rect.top() + dom::scroll_y(window)).max(0.0))
}

/// Probe for native `scroll-behavior` support on the root style object
fn native_smooth_supported(document: &Document) -> bool {
    let Some(root) = document.document_element() else {
        return false;
    };
    let Some(style) = dom::inline_style(&root) else {
        return false;
    };
    js_sys::Reflect::has(style.as_ref(), &JsValue::from_str("scrollBehavior")).unwrap_or(false)
}

fn scroll_native(window: &Window, target_y: f64) {
    let options = ScrollToOptions::new();
    options.set_top(target_y);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn start_fallback(window: &Window, target_y: f64) {
    let anim = ScrollAnimation::new(dom::scroll_y(window), target_y, SCROLL_DURATION_MS);
    schedule_frame(window.clone(), anim, None);
}

/// One step of the fallback loop; reschedules itself until the duration
/// runs out. Elapsed time is measured from the first frame's timestamp.
fn schedule_frame(window: Window, anim: ScrollAnimation, start_ms: Option<f64>) {
    let w = window.clone();
    let frame = Closure::once(move |now: f64| {
        let start = start_ms.unwrap_or(now);
        let elapsed = now - start;
        w.scroll_to_with_x_and_y(0.0, anim.position_at(elapsed));
        if !anim.is_done(elapsed) {
            schedule_frame(w, anim, Some(start));
        }
    });
    let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
    frame.forget();
}
