//! Easing curves for the scroll fallback and reveal animations
//!
//! All curves map progress in [0, 1] to displacement in [0, 1], pinned to
//! 0 at the start and 1 at the end, monotonically non-decreasing between.
//! Out-of-range input is clamped, so callers can feed raw elapsed/duration
//! ratios without guarding the final frame.

/// Clamp a progress value to [0, 1]
#[inline]
pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in-out: slow start, fast middle, slow stop
///
/// Used by the manual smooth-scroll loop when native smooth scrolling is
/// unavailable.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp01(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Cubic ease-out: fast start, decelerating stop
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - clamp01(t);
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.5), 1.0);
        assert_eq!(ease_out_cubic(-0.1), 0.0);
        assert_eq!(ease_out_cubic(1.1), 1.0);
    }

    #[test]
    fn test_in_out_midpoint() {
        // The two cubic halves meet exactly at (0.5, 0.5)
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_in_out_symmetry() {
        // ease(t) + ease(1 - t) == 1 for the symmetric in-out curve
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-9, "asymmetric at t={t}: {sum}");
        }
    }

    proptest! {
        #[test]
        fn prop_in_out_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi) + 1e-12);
        }

        #[test]
        fn prop_out_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi) + 1e-12);
        }

        #[test]
        fn prop_range(t in -10.0f64..=10.0) {
            let v = ease_in_out_cubic(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
