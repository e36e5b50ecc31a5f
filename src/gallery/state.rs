// SPDX-License-Identifier: MPL-2.0
//! Gallery view-state machine.
//!
//! Owns the current index, the last navigation direction, the animation lock
//! and the detail-view flags. All requests arrive as [`Message`]s and are
//! serialized here: navigation is gated by `is_animating`, detail transitions
//! by `is_transitioning`. Timed phases are requested through [`Effect::Schedule`]
//! and completed when the matching [`Ticket`] comes back as
//! [`Message::Elapsed`].
//!
//! State is split in two:
//! - [`Authoritative`]: which artwork is current and which view shows.
//! - [`PresentationHints`]: flags that only drive visuals.

use super::timer::{Deferred, DeferredSlot, Phase, Slot, Ticket};
use super::timing::Timings;
use std::num::NonZeroUsize;

/// Last navigation direction, used to pick the slide-out side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

/// What the gallery shows, independent of animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Authoritative {
    pub current_index: usize,
    pub show_details: bool,
}

/// Transient flags that only affect rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationHints {
    pub direction: Direction,
    pub is_animating: bool,
    pub is_transitioning: bool,
}

/// User-facing request kinds, reported back when input is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    JumpTo(usize),
    OpenDetails,
    CloseDetails,
}

/// Messages accepted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move to the next artwork, wrapping to the first.
    Advance,
    /// Move to the previous artwork, wrapping to the last.
    Retreat,
    /// Move directly to an artwork (indicator press).
    JumpTo(usize),
    /// Cross-fade from slider to detail view.
    OpenDetails,
    /// Cross-fade from detail back to slider view.
    CloseDetails,
    /// A previously scheduled ticket expired.
    Elapsed(Ticket),
}

/// Outcome of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The request was refused by a lock or precondition.
    Dropped(Action),
    /// State changed and a timer must be armed.
    Schedule(Deferred),
    /// A transition finished.
    Settled(Slot),
}

/// The gallery state machine.
#[derive(Debug, Clone)]
pub struct State {
    len: NonZeroUsize,
    view: Authoritative,
    hints: PresentationHints,
    timings: Timings,
    navigation: DeferredSlot,
    detail: DeferredSlot,
    /// Value `show_details` takes at the midpoint of the running detail transition.
    detail_target: bool,
    torn_down: bool,
}

impl State {
    /// Creates a gallery over `len` entries, starting at index 0.
    #[must_use]
    pub fn new(len: NonZeroUsize, timings: Timings) -> Self {
        Self {
            len,
            view: Authoritative::default(),
            hints: PresentationHints::default(),
            timings,
            navigation: DeferredSlot::new(Slot::NavigationLock),
            detail: DeferredSlot::new(Slot::DetailTransition),
            detail_target: false,
            torn_down: false,
        }
    }

    /// Creates a gallery starting at `start`, clamped to the last entry.
    #[must_use]
    pub fn with_start_index(len: NonZeroUsize, timings: Timings, start: usize) -> Self {
        let mut state = Self::new(len, timings);
        state.view.current_index = start.min(len.get() - 1);
        state
    }

    /// Applies a message and reports what the runtime must do next.
    pub fn handle(&mut self, message: Message) -> Effect {
        if self.torn_down {
            return Effect::None;
        }

        match message {
            Message::Advance => {
                let next = (self.view.current_index + 1) % self.len.get();
                self.navigate(next, Direction::Next, Action::Advance)
            }
            Message::Retreat => {
                let len = self.len.get();
                let prev = (self.view.current_index + len - 1) % len;
                self.navigate(prev, Direction::Prev, Action::Retreat)
            }
            Message::JumpTo(target) => {
                let action = Action::JumpTo(target);
                if target >= self.len.get() || target == self.view.current_index {
                    return Effect::Dropped(action);
                }
                // Not wraparound-aware: the visual direction follows numeric order.
                let direction = if target > self.view.current_index {
                    Direction::Next
                } else {
                    Direction::Prev
                };
                self.navigate(target, direction, action)
            }
            Message::OpenDetails => self.begin_detail_transition(true, Action::OpenDetails),
            Message::CloseDetails => self.begin_detail_transition(false, Action::CloseDetails),
            Message::Elapsed(ticket) => self.on_elapsed(ticket),
        }
    }

    fn navigate(&mut self, target: usize, direction: Direction, action: Action) -> Effect {
        if self.hints.is_animating {
            return Effect::Dropped(action);
        }

        self.hints.direction = direction;
        self.hints.is_animating = true;
        self.view.current_index = target;
        Effect::Schedule(
            self.navigation
                .arm(Phase::Unlock, self.timings.slide_lock.as_duration()),
        )
    }

    fn begin_detail_transition(&mut self, show: bool, action: Action) -> Effect {
        if self.hints.is_transitioning || self.view.show_details == show {
            return Effect::Dropped(action);
        }

        self.hints.is_transitioning = true;
        self.detail_target = show;
        Effect::Schedule(
            self.detail
                .arm(Phase::Midpoint, self.timings.detail_midpoint.as_duration()),
        )
    }

    fn on_elapsed(&mut self, ticket: Ticket) -> Effect {
        let fired = match ticket.slot() {
            Slot::NavigationLock => self.navigation.fire(ticket),
            Slot::DetailTransition => self.detail.fire(ticket),
        };

        match fired {
            Some(Phase::Unlock) => {
                self.hints.is_animating = false;
                Effect::Settled(Slot::NavigationLock)
            }
            Some(Phase::Midpoint) => {
                self.view.show_details = self.detail_target;
                Effect::Schedule(
                    self.detail
                        .arm(Phase::Settle, self.timings.detail_settle.as_duration()),
                )
            }
            Some(Phase::Settle) => {
                self.hints.is_transitioning = false;
                Effect::Settled(Slot::DetailTransition)
            }
            None => Effect::None,
        }
    }

    /// Cancels all pending tasks and freezes the machine.
    ///
    /// Returns the slots that had a pending ticket.
    pub fn teardown(&mut self) -> Vec<Slot> {
        self.torn_down = true;
        [&mut self.navigation, &mut self.detail]
            .into_iter()
            .filter_map(|slot| slot.cancel().then_some(slot.slot()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.view.current_index
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.view.show_details
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.hints.direction
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hints.is_animating
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.hints.is_transitioning
    }

    #[must_use]
    pub fn authoritative(&self) -> Authoritative {
        self.view
    }

    #[must_use]
    pub fn hints(&self) -> PresentationHints {
        self.hints
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether any timer is still expected to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.navigation.is_pending() || self.detail.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gallery(len: usize) -> State {
        State::new(NonZeroUsize::new(len).unwrap(), Timings::default())
    }

    fn scheduled(effect: Effect) -> Deferred {
        match effect {
            Effect::Schedule(deferred) => deferred,
            other => panic!("expected Schedule, got {other:?}"),
        }
    }

    #[test]
    fn initial_state_is_first_entry_with_flags_cleared() {
        let state = gallery(6);
        assert_eq!(state.authoritative(), Authoritative::default());
        assert_eq!(state.hints(), PresentationHints::default());
        assert!(!state.has_pending());
    }

    #[test]
    fn retreat_from_first_wraps_to_last() {
        let mut state = gallery(6);
        let deferred = scheduled(state.handle(Message::Retreat));

        assert_eq!(state.current_index(), 5);
        assert_eq!(state.direction(), Direction::Prev);
        assert!(state.is_animating());
        assert_eq!(deferred.delay, Duration::from_millis(600));

        assert_eq!(
            state.handle(Message::Elapsed(deferred.ticket)),
            Effect::Settled(Slot::NavigationLock)
        );
        assert!(!state.is_animating());
    }

    #[test]
    fn advance_from_last_wraps_to_first() {
        let mut state = State::with_start_index(
            NonZeroUsize::new(3).unwrap(),
            Timings::default(),
            2,
        );
        let _ = state.handle(Message::Advance);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Next);
    }

    #[test]
    fn navigation_is_dropped_while_animating() {
        let mut state = gallery(6);
        let _ = state.handle(Message::Advance);
        let before = (state.authoritative(), state.hints());

        assert_eq!(
            state.handle(Message::Advance),
            Effect::Dropped(Action::Advance)
        );
        assert_eq!(
            state.handle(Message::Retreat),
            Effect::Dropped(Action::Retreat)
        );
        assert_eq!(
            state.handle(Message::JumpTo(4)),
            Effect::Dropped(Action::JumpTo(4))
        );
        assert_eq!((state.authoritative(), state.hints()), before);
    }

    #[test]
    fn jump_to_current_index_is_noop() {
        let mut state = gallery(6);
        assert_eq!(
            state.handle(Message::JumpTo(0)),
            Effect::Dropped(Action::JumpTo(0))
        );
        assert!(!state.is_animating());
        assert!(!state.has_pending());
    }

    #[test]
    fn jump_to_infers_direction_from_numeric_order() {
        let mut state = gallery(6);
        let deferred = scheduled(state.handle(Message::JumpTo(3)));
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.direction(), Direction::Next);
        let _ = state.handle(Message::Elapsed(deferred.ticket));

        let mut state = State::with_start_index(
            NonZeroUsize::new(6).unwrap(),
            Timings::default(),
            4,
        );
        let _ = state.handle(Message::JumpTo(1));
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.direction(), Direction::Prev);
    }

    #[test]
    fn jump_to_out_of_range_is_dropped() {
        let mut state = gallery(6);
        assert_eq!(
            state.handle(Message::JumpTo(6)),
            Effect::Dropped(Action::JumpTo(6))
        );
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn open_details_swaps_view_at_midpoint() {
        let mut state = gallery(6);
        let midpoint = scheduled(state.handle(Message::OpenDetails));
        assert!(state.is_transitioning());
        assert!(!state.show_details());
        assert_eq!(midpoint.delay, Duration::from_millis(400));

        let settle = scheduled(state.handle(Message::Elapsed(midpoint.ticket)));
        assert!(state.show_details());
        assert!(state.is_transitioning());
        assert_eq!(settle.delay, Duration::from_millis(50));

        assert_eq!(
            state.handle(Message::Elapsed(settle.ticket)),
            Effect::Settled(Slot::DetailTransition)
        );
        assert!(state.show_details());
        assert!(!state.is_transitioning());
    }

    #[test]
    fn close_details_mirrors_open() {
        let mut state = gallery(6);
        let midpoint = scheduled(state.handle(Message::OpenDetails));
        let settle = scheduled(state.handle(Message::Elapsed(midpoint.ticket)));
        let _ = state.handle(Message::Elapsed(settle.ticket));

        let midpoint = scheduled(state.handle(Message::CloseDetails));
        assert!(state.is_transitioning());
        assert!(state.show_details());
        let settle = scheduled(state.handle(Message::Elapsed(midpoint.ticket)));
        assert!(!state.show_details());
        let _ = state.handle(Message::Elapsed(settle.ticket));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn detail_requests_are_gated_during_transition() {
        let mut state = gallery(6);
        let midpoint = scheduled(state.handle(Message::OpenDetails));

        assert_eq!(
            state.handle(Message::OpenDetails),
            Effect::Dropped(Action::OpenDetails)
        );
        assert_eq!(
            state.handle(Message::CloseDetails),
            Effect::Dropped(Action::CloseDetails)
        );
        // The first ticket is still the live one.
        assert!(matches!(
            state.handle(Message::Elapsed(midpoint.ticket)),
            Effect::Schedule(_)
        ));
    }

    #[test]
    fn close_without_open_details_is_dropped() {
        let mut state = gallery(6);
        assert_eq!(
            state.handle(Message::CloseDetails),
            Effect::Dropped(Action::CloseDetails)
        );
        assert!(!state.is_transitioning());
    }

    #[test]
    fn teardown_cancels_pending_and_ignores_stale_tickets() {
        let mut state = gallery(6);
        let nav = scheduled(state.handle(Message::Advance));
        let detail = scheduled(state.handle(Message::OpenDetails));

        let cancelled = state.teardown();
        assert_eq!(
            cancelled,
            vec![Slot::NavigationLock, Slot::DetailTransition]
        );
        assert!(!state.has_pending());

        assert_eq!(state.handle(Message::Elapsed(nav.ticket)), Effect::None);
        assert_eq!(state.handle(Message::Elapsed(detail.ticket)), Effect::None);
        assert_eq!(state.handle(Message::Advance), Effect::None);
        assert!(state.is_animating());
        assert!(!state.show_details());
        assert!(state.is_torn_down());
    }

    #[test]
    fn start_index_is_clamped() {
        let state = State::with_start_index(
            NonZeroUsize::new(4).unwrap(),
            Timings::default(),
            10,
        );
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn single_entry_gallery_wraps_onto_itself() {
        let mut state = gallery(1);
        let _ = state.handle(Message::Advance);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_animating());
    }
}
