// SPDX-License-Identifier: MPL-2.0
//! Transition timing domain types.

use crate::config::{
    DEFAULT_DETAIL_MIDPOINT_MS, DEFAULT_DETAIL_SETTLE_MS, DEFAULT_SLIDE_LOCK_MS,
    MAX_TRANSITION_DELAY_MS, MIN_TRANSITION_DELAY_MS,
};
use std::time::Duration;

/// Delay of one transition phase, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–5000 ms).
///
/// # Example
///
/// ```
/// use iced_gallery::gallery::TransitionDelay;
///
/// let delay = TransitionDelay::new(600);
/// assert_eq!(delay.value(), 600);
///
/// // Values outside range are clamped
/// assert_eq!(TransitionDelay::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_DELAY_MS, MAX_TRANSITION_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

/// Phase durations of the gallery transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long navigation stays locked after a slide.
    pub slide_lock: TransitionDelay,
    /// Delay from the start of a detail transition to the view swap.
    pub detail_midpoint: TransitionDelay,
    /// Delay from the view swap to the mask being dropped.
    pub detail_settle: TransitionDelay,
}

impl Timings {
    /// Total length of a detail transition.
    #[must_use]
    pub fn detail_total(&self) -> Duration {
        self.detail_midpoint.as_duration() + self.detail_settle.as_duration()
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            slide_lock: TransitionDelay::new(DEFAULT_SLIDE_LOCK_MS),
            detail_midpoint: TransitionDelay::new(DEFAULT_DETAIL_MIDPOINT_MS),
            detail_settle: TransitionDelay::new(DEFAULT_DETAIL_SETTLE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(TransitionDelay::new(0).value(), MIN_TRANSITION_DELAY_MS);
        assert_eq!(
            TransitionDelay::new(60_000).value(),
            MAX_TRANSITION_DELAY_MS
        );
    }

    #[test]
    fn default_timings_match_gallery_phases() {
        let timings = Timings::default();
        assert_eq!(timings.slide_lock.as_duration(), Duration::from_millis(600));
        assert_eq!(
            timings.detail_midpoint.as_duration(),
            Duration::from_millis(400)
        );
        assert_eq!(timings.detail_settle.as_duration(), Duration::from_millis(50));
        assert_eq!(timings.detail_total(), Duration::from_millis(450));
    }
}
