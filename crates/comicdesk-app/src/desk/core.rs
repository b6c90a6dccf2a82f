use comicdesk_common::{DeskEvent, EventBus, Size, WindowId};
use comicdesk_compositor::{Compositor, PointerEvent, Scene};
use comicdesk_config::DeskConfig;
use comicdesk_wm::{StoreConfig, WindowCommand, WindowStore};
use tokio::sync::broadcast;

use crate::windows::{self, AppWindow, WindowView};

use super::types::Desk;

const EVENT_CAPACITY: usize = 256;

impl Desk {
    pub fn new(config: &DeskConfig) -> Self {
        let events = EventBus::new(EVENT_CAPACITY);
        let store = WindowStore::with_config(StoreConfig::from(&config.windows)).with_event_bus(events.clone());
        Self {
            store,
            compositor: Compositor::from_config(&config.compositor),
            registry: windows::registry(),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeskEvent> {
        self.events.subscribe()
    }

    pub fn store(&self) -> &WindowStore<WindowView> {
        &self.store
    }

    pub fn open(&mut self, window: &AppWindow) -> Option<WindowId> {
        let id = self.store.open_from_registry(&self.registry, &window.open_request());
        if let Some(id) = &id {
            tracing::debug!(window = %id.as_str(), kind = window.key(), "Opened window");
        }
        id
    }

    pub fn resize(&mut self, size: Size) -> bool {
        self.compositor.observe_container(&mut self.store, size)
    }

    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        self.compositor.handle_pointer(&mut self.store, event)
    }

    pub fn command(&mut self, cmd: WindowCommand) -> bool {
        self.store.execute(cmd)
    }

    pub fn render(&mut self) -> &Scene {
        self.compositor.render(&mut self.store)
    }

    /// Announce shutdown and drop every window.
    pub fn shutdown(&mut self) {
        self.store.clear_windows();
        self.events.publish(DeskEvent::Shutdown);
        tracing::info!("Desk shut down");
    }
}
