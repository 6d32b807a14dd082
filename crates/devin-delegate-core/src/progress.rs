//! Progress events and change detection.

use serde::{Deserialize, Serialize};

use crate::session::SessionSnapshot;

/// Longest message body relayed in a progress event.
const MESSAGE_DISPLAY_LIMIT: usize = 200;

/// A notification describing an observed change since the last snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Human-readable description of the change.
    pub message: String,
    /// Fraction complete, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl ProgressEvent {
    /// A plain note event.
    #[must_use]
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            progress: None,
        }
    }

    /// Event describing `new`, or `None` when nothing observable changed.
    ///
    /// Pure over (previous, new): the monitor holds one last-observed
    /// snapshot and feeds it through here each poll. Consecutive identical
    /// snapshots never produce a second event.
    #[must_use]
    pub fn diff(prev: Option<&SessionSnapshot>, new: &SessionSnapshot) -> Option<Self> {
        let changed = prev.is_none_or(|p| p.status != new.status || p.message != new.message);
        if !changed {
            return None;
        }

        let message_changed = prev.is_none_or(|p| p.message != new.message);
        let message = match (&new.message, message_changed) {
            (Some(m), true) => format!("[{}] {}", m.kind, truncate(&m.text)),
            _ => format!("Status: {}", new.status),
        };

        Some(Self {
            message,
            progress: None,
        })
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MESSAGE_DISPLAY_LIMIT {
        let cut: String = text.chars().take(MESSAGE_DISPLAY_LIMIT).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
