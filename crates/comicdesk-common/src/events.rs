use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::WindowId;
use crate::types::Size;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DeskEvent {
    ContainerResized(Size),
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WindowFocused(WindowId),
    WindowMinimized(WindowId),
    WindowRestored(WindowId),
    WindowMaximized(WindowId),
    WindowUnmaximized(WindowId),
    Shutdown,
    #[serde(other)]
    Unknown,
}

/// Fan-out of desk events to any number of subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DeskEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeskEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: DeskEvent) -> usize {
        tracing::trace!(?event, "publishing desk event");
        self.sender.send(event).unwrap_or(0)
    }
}
