// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what the gallery does.
//!
//! Events are kept in a memory-bounded circular buffer. Warnings and errors
//! are additionally echoed to stderr so they show up when the app is run
//! from a terminal.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, Severity};

use std::time::Instant;

/// Event recorder owned by the application.
#[derive(Debug)]
pub struct Diagnostics {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
    echo: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            echo: true,
        }
    }

    /// Disables the stderr echo (tests).
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Records an event, echoing warnings and errors to stderr.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        let at = Instant::now();
        let severity = kind.severity();
        if self.echo && severity >= Severity::Warning {
            let elapsed = at.duration_since(self.started_at).as_secs_f32();
            eprintln!("[{elapsed:>8.3}s] {severity}: {kind}");
        }
        self.buffer.push(DiagnosticEvent { at, kind });
    }

    /// Events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEventKind> {
        self.buffer.last().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of retained events at or above `severity`.
    #[must_use]
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.events()
            .filter(|event| event.kind.severity() >= severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArtworkId;

    #[test]
    fn record_keeps_events_in_order() {
        let mut diagnostics = Diagnostics::default().silent();
        diagnostics.record(DiagnosticEventKind::NavigationSettled { index: 1 });
        diagnostics.record(DiagnosticEventKind::ImageRequested {
            id: ArtworkId::new(2),
        });

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.last(),
            Some(&DiagnosticEventKind::ImageRequested {
                id: ArtworkId::new(2)
            })
        );
    }

    #[test]
    fn count_at_least_filters_by_severity() {
        let mut diagnostics = Diagnostics::default().silent();
        diagnostics.record(DiagnosticEventKind::NavigationSettled { index: 0 });
        diagnostics.record(DiagnosticEventKind::ConfigWarning {
            message: "bad".into(),
        });

        assert_eq!(diagnostics.count_at_least(Severity::Info), 2);
        assert_eq!(diagnostics.count_at_least(Severity::Warning), 1);
        assert_eq!(diagnostics.count_at_least(Severity::Error), 0);
    }

    #[test]
    fn capacity_bounds_retained_events() {
        let mut diagnostics = Diagnostics::new(BufferCapacity::new(0)).silent();
        for index in 0..100 {
            diagnostics.record(DiagnosticEventKind::NavigationSettled { index });
        }
        assert_eq!(
            diagnostics.len(),
            crate::config::MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
