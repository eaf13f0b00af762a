//! Pure animation math
//!
//! Everything the effects compute lives here. This module must stay free of
//! platform dependencies so it can be unit-tested natively:
//! - Time arrives as plain milliseconds
//! - No DOM types, no rendering
//! - Same input, same output

pub mod easing;
pub mod latch;
pub mod parallax;
pub mod scroll;
pub mod stagger;

pub use easing::{ease_in_out_cubic, ease_out_cubic};
pub use latch::FrameLatch;
pub use parallax::parallax_offset;
pub use scroll::ScrollAnimation;
pub use stagger::stagger_delay_ms;
