//! Stagger timing for the social link load-in

use crate::consts::{STAGGER_BASE_MS, STAGGER_STEP_MS};

/// Reveal delay for the social link at `index` in document order
///
/// Strictly increasing in index, so links always appear left to right.
#[inline]
pub fn stagger_delay_ms(index: u32) -> u32 {
    STAGGER_BASE_MS + index * STAGGER_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_link_waits_the_base_delay() {
        assert_eq!(stagger_delay_ms(0), STAGGER_BASE_MS);
    }

    #[test]
    fn test_delays_strictly_increase() {
        let delays: Vec<u32> = (0..8).map(stagger_delay_ms).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
    }

    #[test]
    fn test_step_is_constant() {
        assert_eq!(
            stagger_delay_ms(5) - stagger_delay_ms(4),
            STAGGER_STEP_MS
        );
    }
}
