// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler for driving the gallery without a runtime.
//!
//! Keeps a virtual clock and the list of armed tickets. Tests and benchmarks
//! use it to check timing properties (e.g. "after 400 ms the detail view is
//! showing") without sleeping.

use super::state::{Effect, Message, State};
use super::timer::Ticket;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Duration,
    sequence: u64,
    ticket: Ticket,
}

/// Virtual-time driver for a [`State`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    sequence: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed tickets not yet delivered, stale ones included.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Records a schedule request, if the effect carries one.
    pub fn accept(&mut self, effect: Effect) {
        if let Effect::Schedule(deferred) = effect {
            self.sequence += 1;
            self.pending.push(Pending {
                deadline: self.now + deferred.delay,
                sequence: self.sequence,
                ticket: deferred.ticket,
            });
        }
    }

    /// Sends `message` to `state` and accepts the resulting effect.
    pub fn dispatch(&mut self, state: &mut State, message: Message) -> Effect {
        let effect = state.handle(message);
        self.accept(effect);
        effect
    }

    /// Moves the clock forward, delivering every ticket that expires on the way.
    ///
    /// Tickets armed by a delivery are delivered too if they expire before the
    /// new time. Returns the number of tickets delivered.
    pub fn advance_by(&mut self, state: &mut State, delta: Duration) -> usize {
        let target = self.now + delta;
        let mut delivered = 0;

        while let Some(position) = self.next_due(target) {
            let due = self.pending.remove(position);
            self.now = due.deadline;
            let effect = state.handle(Message::Elapsed(due.ticket));
            self.accept(effect);
            delivered += 1;
        }

        self.now = target;
        delivered
    }

    /// Delivers tickets until none remain.
    pub fn run_until_idle(&mut self, state: &mut State) -> usize {
        let mut delivered = 0;
        while let Some(last) = self.pending.iter().map(|p| p.deadline).max() {
            delivered += self.advance_by(state, last.saturating_sub(self.now));
        }
        delivered
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= target)
            .min_by_key(|(_, p)| (p.deadline, p.sequence))
            .map(|(index, _)| index)
    }
}
