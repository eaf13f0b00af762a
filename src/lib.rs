//! Page Motion - scroll and hover effects for a static personal site
//!
//! Core modules:
//! - `motion`: Pure animation math (easing, scroll sampling, stagger, frame latch)
//! - `effects`: DOM wiring for each visual effect (wasm32 only)
//! - `settings`: Effect preferences with LocalStorage persistence

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod effects;
pub mod motion;
pub mod settings;

pub use settings::Settings;

/// Effect tuning constants
pub mod consts {
    /// Fraction of a section that must be visible before it reveals
    pub const REVEAL_THRESHOLD: f64 = 0.15;
    /// Bottom root margin so sections reveal slightly before the fold
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
    /// Initial downward offset of a hidden section, pixels
    pub const REVEAL_OFFSET_PX: f64 = 24.0;
    /// Section fade/slide duration, milliseconds
    pub const REVEAL_FADE_MS: u32 = 600;

    /// Lazy image fade-in duration, milliseconds
    pub const LAZY_FADE_MS: u32 = 400;

    /// Duration of the manual smooth-scroll fallback, milliseconds
    pub const SCROLL_DURATION_MS: f64 = 600.0;

    /// Hero transform per scrolled pixel
    pub const PARALLAX_RATE: f64 = 0.4;

    /// Photo item scale factor while hovered
    pub const HOVER_SCALE: f64 = 1.06;
    /// Photo item z-index while hovered
    pub const HOVER_Z_INDEX: i32 = 10;
    /// Hover transform duration, milliseconds
    pub const HOVER_MS: u32 = 250;

    /// Delay before the first social link reveals, milliseconds
    pub const STAGGER_BASE_MS: u32 = 300;
    /// Additional delay per social link, milliseconds
    pub const STAGGER_STEP_MS: u32 = 120;
    /// Initial downward offset of a hidden social link, pixels
    pub const STAGGER_OFFSET_PX: f64 = 12.0;
    /// Social link fade/slide duration, milliseconds
    pub const STAGGER_FADE_MS: u32 = 400;
}
