//! Broadcast + history progress store.

use std::{collections::VecDeque, sync::RwLock};

use futures::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::ProgressEvent;

/// Most events retained for late subscribers.
const HISTORY_LIMIT: usize = 1024;

/// Progress store with broadcast and history support.
///
/// A late subscriber receives every event already emitted, then switches
/// to live updates, so a delegation's progress is observable end to end
/// no matter when the caller attaches. Events are delivered strictly in
/// emission order.
pub struct ProgressStore {
    history: RwLock<VecDeque<ProgressEvent>>,
    sender: broadcast::Sender<ProgressEvent>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    /// Create a new progress store.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1024);
        Self {
            history: RwLock::new(VecDeque::with_capacity(16)),
            sender,
        }
    }

    /// Push an event to both live listeners and history.
    pub fn push(&self, event: ProgressEvent) {
        let _ = self.sender.send(event.clone()); // live listeners
        let mut history = self.history.write().unwrap();
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(event);
    }

    /// Push a plain note.
    pub fn push_note<S: Into<String>>(&self, message: S) {
        self.push(ProgressEvent::note(message));
    }

    /// Get a receiver for live updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }

    /// Snapshot of the history so far.
    #[must_use]
    pub fn history(&self) -> Vec<ProgressEvent> {
        self.history.read().unwrap().iter().cloned().collect()
    }

    /// Stream that yields history first, then live updates.
    #[must_use]
    pub fn history_plus_stream(&self) -> futures::stream::BoxStream<'static, ProgressEvent> {
        let (history, rx) = (self.history(), self.subscribe());

        let hist = futures::stream::iter(history);
        let live = BroadcastStream::new(rx).filter_map(|res| async move { res.ok() });

        Box::pin(hist.chain(live))
    }
}
