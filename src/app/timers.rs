// SPDX-License-Identifier: MPL-2.0
//! Runtime side of the gallery's deferred tasks.
//!
//! Every [`Deferred`] becomes an abortable Iced task that sleeps and then
//! delivers the ticket back as [`gallery::Message::Elapsed`]. One handle is
//! kept per slot; re-arming a slot aborts the task it replaces.

use super::Message;
use crate::gallery::{self, Deferred, Slot};
use iced::task::{self, Task};
use std::collections::HashMap;
use std::fmt;

#[derive(Default)]
pub struct TimerHandles {
    handles: HashMap<Slot, task::Handle>,
}

impl fmt::Debug for TimerHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandles")
            .field("slots", &self.handles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TimerHandles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sleep for `deferred`, replacing any task in the same slot.
    pub fn schedule(&mut self, deferred: Deferred) -> Task<Message> {
        let Deferred { ticket, delay } = deferred;
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Gallery(gallery::Message::Elapsed(ticket)),
        )
        .abortable();

        if let Some(previous) = self.handles.insert(ticket.slot(), handle) {
            previous.abort();
        }
        task
    }

    /// Forgets the handle of a slot whose transition finished.
    pub fn settle(&mut self, slot: Slot) {
        self.handles.remove(&slot);
    }

    /// Aborts every pending task. Returns how many were aborted.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        count
    }

    /// Number of slots with a live task.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}
