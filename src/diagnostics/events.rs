// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use crate::catalog::ArtworkId;
use crate::gallery::{Action, Direction, Slot};
use std::fmt;
use std::time::Instant;

/// How loudly an event is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    NavigationStarted {
        from: usize,
        to: usize,
        direction: Direction,
    },
    NavigationSettled {
        index: usize,
    },
    /// A request was refused by a lock or precondition.
    InputDropped {
        action: Action,
    },
    DetailTransitionStarted {
        opening: bool,
    },
    DetailViewSwapped {
        showing: bool,
    },
    DetailTransitionSettled {
        showing: bool,
    },
    ImageRequested {
        id: ArtworkId,
    },
    ImageLoaded {
        id: ArtworkId,
        width: u32,
        height: u32,
    },
    ImageFailed {
        id: ArtworkId,
        reason: String,
    },
    ConfigWarning {
        message: String,
    },
    /// The gallery was torn down; `cancelled` lists slots that still had a timer.
    TornDown {
        cancelled: Vec<Slot>,
    },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticEventKind::ImageFailed { .. } | DiagnosticEventKind::ConfigWarning { .. } => {
                Severity::Warning
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::NavigationStarted {
                from,
                to,
                direction,
            } => write!(f, "navigate {from} -> {to} ({direction:?})"),
            DiagnosticEventKind::NavigationSettled { index } => {
                write!(f, "navigation settled at {index}")
            }
            DiagnosticEventKind::InputDropped { action } => write!(f, "dropped {action:?}"),
            DiagnosticEventKind::DetailTransitionStarted { opening } => {
                let what = if *opening { "opening" } else { "closing" };
                write!(f, "{what} details")
            }
            DiagnosticEventKind::DetailViewSwapped { showing } => {
                write!(f, "detail view swapped (showing: {showing})")
            }
            DiagnosticEventKind::DetailTransitionSettled { showing } => {
                write!(f, "detail transition settled (showing: {showing})")
            }
            DiagnosticEventKind::ImageRequested { id } => write!(f, "requesting image {id}"),
            DiagnosticEventKind::ImageLoaded { id, width, height } => {
                write!(f, "image {id} loaded ({width}x{height})")
            }
            DiagnosticEventKind::ImageFailed { id, reason } => {
                write!(f, "image {id} failed: {reason}")
            }
            DiagnosticEventKind::ConfigWarning { message } => write!(f, "config: {message}"),
            DiagnosticEventKind::TornDown { cancelled } => {
                write!(f, "torn down, cancelled {} pending timer(s)", cancelled.len())
            }
        }
    }
}

/// A timestamped event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_warnings() {
        let failed = DiagnosticEventKind::ImageFailed {
            id: ArtworkId::new(2),
            reason: "HTTP status: 404".into(),
        };
        assert_eq!(failed.severity(), Severity::Warning);
        assert_eq!(
            DiagnosticEventKind::NavigationSettled { index: 0 }.severity(),
            Severity::Info
        );
    }

    #[test]
    fn display_is_human_readable() {
        let started = DiagnosticEventKind::NavigationStarted {
            from: 0,
            to: 5,
            direction: Direction::Prev,
        };
        assert_eq!(started.to_string(), "navigate 0 -> 5 (Prev)");

        let torn = DiagnosticEventKind::TornDown {
            cancelled: vec![Slot::NavigationLock],
        };
        assert_eq!(torn.to_string(), "torn down, cancelled 1 pending timer(s)");
    }
}
