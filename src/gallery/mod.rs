// SPDX-License-Identifier: MPL-2.0
//! Gallery presentation-state machine.
//!
//! This module is free of any UI toolkit: it decides what the gallery shows
//! and which timers must run, while the application shell arms those timers
//! as Iced tasks and the renderer turns the state into widgets.

mod scheduler;
mod state;
pub mod timer;
mod timing;

pub use scheduler::ManualScheduler;
pub use state::{
    Action, Authoritative, Direction, Effect, Message, PresentationHints, State,
};
pub use timer::{Deferred, Phase, Slot, Ticket};
pub use timing::{Timings, TransitionDelay};
