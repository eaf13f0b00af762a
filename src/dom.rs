//! Shared DOM access helpers
//!
//! Thin wrappers over web-sys so the effect modules read as wiring instead
//! of cast plumbing. Anything that can only fail on malformed input is
//! swallowed; missing pieces come back as `None`/empty.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, NodeList, Window};

/// Elements matching `selector`, in document order. Empty on no match or a
/// selector the browser rejects.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(_) => Vec::new(),
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inline style object, `None` for non-HTML elements (e.g. inline SVG)
pub fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    el.dyn_ref::<HtmlElement>().map(|html| html.style())
}

/// Set one inline style property
pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(style) = inline_style(el) {
        let _ = style.set_property(prop, value);
    }
}

/// Remove one inline style property, restoring the stylesheet value
pub fn clear_style(el: &Element, prop: &str) {
    if let Some(style) = inline_style(el) {
        let _ = style.remove_property(prop);
    }
}

/// Current vertical page offset in pixels
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
