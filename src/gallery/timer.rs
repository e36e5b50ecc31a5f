// SPDX-License-Identifier: MPL-2.0
//! Cancellable deferred-task slots.
//!
//! The gallery never sleeps or spawns anything itself. Each transition kind
//! owns one [`DeferredSlot`]; arming it yields a [`Deferred`] request that the
//! runtime (Iced task, or [`super::ManualScheduler`] in tests) turns into a
//! real timer. When that timer expires the runtime hands the [`Ticket`] back.
//!
//! Every arm or cancel bumps the slot's generation, so a ticket from an
//! earlier arm is recognised as stale and ignored. This is what makes
//! teardown deterministic even if the runtime delivers a late expiry.

use std::time::Duration;

/// Transition kind owning a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Releases the animation lock after a slide.
    NavigationLock,
    /// Drives the two-step slider/detail cross-fade.
    DetailTransition,
}

/// What should happen when a ticket fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Clear `is_animating`.
    Unlock,
    /// Swap `show_details`, keep the mask up.
    Midpoint,
    /// Drop the transition mask.
    Settle,
}

/// Generation-stamped identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    phase: Phase,
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub fn slot(self) -> Slot {
        self.slot
    }

    #[must_use]
    pub fn phase(self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Request to deliver `ticket` back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub ticket: Ticket,
    pub delay: Duration,
}

/// At most one pending timer for a given [`Slot`].
#[derive(Debug, Clone)]
pub struct DeferredSlot {
    slot: Slot,
    generation: u64,
    pending: Option<Phase>,
}

impl DeferredSlot {
    #[must_use]
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            generation: 0,
            pending: None,
        }
    }

    /// Arms the slot, superseding any pending ticket.
    pub fn arm(&mut self, phase: Phase, delay: Duration) -> Deferred {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(phase);
        Deferred {
            ticket: Ticket {
                slot: self.slot,
                phase,
                generation: self.generation,
            },
            delay,
        }
    }

    /// Invalidates the pending ticket. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().is_some()
    }

    /// Consumes `ticket` if it is the current one and returns its phase.
    pub fn fire(&mut self, ticket: Ticket) -> Option<Phase> {
        let current = ticket.slot == self.slot
            && ticket.generation == self.generation
            && self.pending == Some(ticket.phase);
        if current {
            self.pending = None;
            Some(ticket.phase)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }
}
