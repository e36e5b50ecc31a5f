// SPDX-License-Identifier: MPL-2.0
//! Pure visual derivations from gallery state.
//!
//! Views read offsets, opacities and labels from here so they can be tested
//! without building widgets.

use crate::config::{REVEAL_DELAYS_MS, REVEAL_FADE_MS, REVEAL_TRAVEL_PX};
use crate::gallery::{Direction, PresentationHints};
use crate::ui::design_tokens::{opacity, sizing};
use iced::Color;
use std::time::Duration;

/// Horizontal shift and opacity of the slider info panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStyle {
    /// Negative moves left.
    pub offset: f32,
    pub alpha: f32,
}

/// Info panel placement for the current hints.
///
/// While a slide change is in flight the panel leaves towards the side it
/// came from: left for `Next`, right for `Prev`.
#[must_use]
pub fn info_panel(hints: PresentationHints) -> SlideStyle {
    if !hints.is_animating {
        return SlideStyle {
            offset: 0.0,
            alpha: opacity::OPAQUE,
        };
    }

    let offset = match hints.direction {
        Direction::Next => -sizing::SLIDE_OFFSET,
        Direction::Prev => sizing::SLIDE_OFFSET,
    };
    SlideStyle {
        offset,
        alpha: opacity::DIMMED,
    }
}

/// Whether the opaque transition layer covers the window.
#[must_use]
pub fn mask_visible(hints: PresentationHints) -> bool {
    hints.is_transitioning
}

/// Elements of the detail view that fade in one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Badge,
    Title,
    Artist,
    Description,
    Details,
}

impl RevealStep {
    pub const ALL: [RevealStep; 5] = [
        RevealStep::Badge,
        RevealStep::Title,
        RevealStep::Artist,
        RevealStep::Description,
        RevealStep::Details,
    ];

    /// Delay after the detail view appeared before this element starts.
    #[must_use]
    pub fn delay(self) -> Duration {
        let index = match self {
            RevealStep::Badge => 0,
            RevealStep::Title => 1,
            RevealStep::Artist => 2,
            RevealStep::Description => 3,
            RevealStep::Details => 4,
        };
        Duration::from_millis(REVEAL_DELAYS_MS[index])
    }
}

/// Opacity and downward displacement of a revealing element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub alpha: f32,
    /// Remaining travel in pixels; 0 once settled.
    pub lift: f32,
}

impl Reveal {
    pub const HIDDEN: Reveal = Reveal {
        alpha: 0.0,
        lift: REVEAL_TRAVEL_PX,
    };

    pub const SHOWN: Reveal = Reveal {
        alpha: 1.0,
        lift: 0.0,
    };
}

/// Reveal state of `step` at `elapsed` since the detail view appeared.
#[must_use]
pub fn reveal(step: RevealStep, elapsed: Duration) -> Reveal {
    let Some(running) = elapsed.checked_sub(step.delay()) else {
        return Reveal::HIDDEN;
    };

    let fade = Duration::from_millis(REVEAL_FADE_MS);
    if running >= fade {
        return Reveal::SHOWN;
    }

    let progress = ease_out(running.as_secs_f32() / fade.as_secs_f32());
    Reveal {
        alpha: progress,
        lift: REVEAL_TRAVEL_PX * (1.0 - progress),
    }
}

/// Time after which every reveal step has settled.
#[must_use]
pub fn reveal_duration() -> Duration {
    let last = REVEAL_DELAYS_MS.iter().copied().max().unwrap_or(0);
    Duration::from_millis(last + REVEAL_FADE_MS)
}

fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One bar of the vertical slide indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub index: usize,
    pub height: f32,
    pub alpha: f32,
    pub active: bool,
}

/// Indicator bars for `len` entries with `current` highlighted.
#[must_use]
pub fn indicators(len: usize, current: usize) -> Vec<Indicator> {
    (0..len)
        .map(|index| {
            let active = index == current;
            Indicator {
                index,
                height: if active {
                    sizing::INDICATOR_ACTIVE_HEIGHT
                } else {
                    sizing::INDICATOR_HEIGHT
                },
                alpha: if active {
                    opacity::OPAQUE
                } else {
                    opacity::INDICATOR_IDLE
                },
                active,
            }
        })
        .collect()
}

/// Footer position, e.g. `ARTWORK 01 OF 06`.
#[must_use]
pub fn position_label(index: usize, len: usize) -> String {
    format!("ARTWORK {:02} OF {:02}", index + 1, len)
}

/// Multiplies the alpha of `color` by `alpha`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hints(direction: Direction, is_animating: bool) -> PresentationHints {
        PresentationHints {
            direction,
            is_animating,
            is_transitioning: false,
        }
    }

    #[test]
    fn idle_panel_is_centered_and_opaque() {
        let style = info_panel(hints(Direction::Prev, false));
        assert_relative_eq!(style.offset, 0.0);
        assert_relative_eq!(style.alpha, 1.0);
    }

    #[test]
    fn animating_panel_moves_against_direction() {
        let next = info_panel(hints(Direction::Next, true));
        let prev = info_panel(hints(Direction::Prev, true));
        assert_relative_eq!(next.offset, -32.0);
        assert_relative_eq!(prev.offset, 32.0);
        assert_relative_eq!(next.alpha, 0.0);
    }

    #[test]
    fn mask_follows_transition_flag() {
        let mut h = hints(Direction::Next, false);
        assert!(!mask_visible(h));
        h.is_transitioning = true;
        assert!(mask_visible(h));
    }

    #[test]
    fn reveal_steps_are_staggered_by_100ms() {
        let delays: Vec<u128> = RevealStep::ALL
            .iter()
            .map(|step| step.delay().as_millis())
            .collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600]);
    }

    #[test]
    fn reveal_progresses_from_hidden_to_shown() {
        assert_eq!(
            reveal(RevealStep::Badge, Duration::from_millis(199)),
            Reveal::HIDDEN
        );

        let halfway = reveal(RevealStep::Badge, Duration::from_millis(450));
        assert!(halfway.alpha > 0.5 && halfway.alpha < 1.0);
        assert!(halfway.lift > 0.0 && halfway.lift < REVEAL_TRAVEL_PX);
        assert_relative_eq!(halfway.alpha + halfway.lift / REVEAL_TRAVEL_PX, 1.0);

        assert_eq!(
            reveal(RevealStep::Badge, Duration::from_millis(700)),
            Reveal::SHOWN
        );
        // Details start last.
        assert_eq!(
            reveal(RevealStep::Details, Duration::from_millis(599)),
            Reveal::HIDDEN
        );
    }

    #[test]
    fn reveal_duration_covers_last_step() {
        assert_eq!(reveal_duration(), Duration::from_millis(1100));
        assert_eq!(
            reveal(RevealStep::Details, reveal_duration()),
            Reveal::SHOWN
        );
    }

    #[test]
    fn indicators_highlight_current() {
        let bars = indicators(6, 2);
        assert_eq!(bars.len(), 6);
        assert!(bars[2].active);
        assert_relative_eq!(bars[2].height, 40.0);
        assert_relative_eq!(bars[0].height, 16.0);
        assert_relative_eq!(bars[0].alpha, opacity::INDICATOR_IDLE);
        assert_eq!(bars.iter().filter(|bar| bar.active).count(), 1);
    }

    #[test]
    fn position_label_is_zero_padded() {
        assert_eq!(position_label(0, 6), "ARTWORK 01 OF 06");
        assert_eq!(position_label(11, 12), "ARTWORK 12 OF 12");
    }

    #[test]
    fn fade_scales_existing_alpha() {
        let color = fade(Color::from_rgba(1.0, 1.0, 1.0, 0.6), 0.5);
        assert_relative_eq!(color.a, 0.3);
    }
}
