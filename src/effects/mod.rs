//! DOM wiring for each visual effect
//!
//! One submodule per effect, each exposing an `install` that queries its
//! selectors, attaches listeners/observers, and silently no-ops when the
//! page lacks the target elements. Effects are independent: none assumes
//! another ran, and a missing `.hero` never affects the photo grid.

pub mod gallery;
pub mod hero;
pub mod lazy_images;
pub mod reveal;
pub mod smooth_scroll;
pub mod social;

use web_sys::Document;

use crate::Settings;

/// Install every effect enabled by `settings`
pub fn install_all(document: &Document, settings: &Settings) {
    reveal::install(document, settings);
    lazy_images::install(document, settings);
    smooth_scroll::install(document, settings);
    hero::install(document, settings);
    gallery::install(document, settings);
    social::install(document, settings);
}
