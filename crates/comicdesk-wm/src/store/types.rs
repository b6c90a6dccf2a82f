//! Core types and accessors for WindowStore.

use comicdesk_common::{DeskEvent, EventBus, Size, WindowId};
use comicdesk_config::schema::WindowsConfig;

use crate::portal::PortalArena;
use crate::registry::ViewportClass;
use crate::window::WindowInstance;

/// Size limits and defaults the store applies to every window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreConfig {
    pub min_width: f64,
    pub min_height: f64,
    pub default_width: f64,
    pub default_height: f64,
    pub mobile_breakpoint: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_width: 320.0,
            min_height: 220.0,
            default_width: 720.0,
            default_height: 480.0,
            mobile_breakpoint: 768.0,
        }
    }
}

impl From<&WindowsConfig> for StoreConfig {
    fn from(config: &WindowsConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
            default_width: config.default_width,
            default_height: config.default_height,
            mobile_breakpoint: config.mobile_breakpoint,
        }
    }
}

/// Relative pointer movement since the last event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PointerDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Non-finite components count as no movement.
    pub(super) fn sanitized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            dx: finite(self.dx),
            dy: finite(self.dy),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Ordered collection of open windows plus the container they live in.
///
/// List order is creation order; the compositor derives paint order from
/// it. `C` is the content type held in each window's portal slot.
pub struct WindowStore<C> {
    pub(super) windows: Vec<WindowInstance>,
    pub(super) portals: PortalArena<C>,
    pub(super) container: Size,
    pub(super) config: StoreConfig,
    /// Bumped on every open request; feeds generated `window-N` ids.
    pub(super) next_id: u64,
    /// Bumped on every state change.
    pub(super) revision: u64,
    pub(super) events: Option<EventBus>,
}

impl<C> Default for WindowStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowStore<C> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            windows: Vec::new(),
            portals: PortalArena::new(),
            container: Size::ZERO,
            config,
            next_id: 0,
            revision: 0,
            events: None,
        }
    }

    /// Publish window lifecycle events on `bus`.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    // -- Accessors --

    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn focused(&self) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.status.is_focused)
    }

    pub fn moving(&self) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.status.is_moving)
    }

    pub fn resizing(&self) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.status.is_resizing)
    }

    /// Whether a drag (move or resize) is in progress.
    pub fn is_capturing(&self) -> bool {
        self.windows
            .iter()
            .any(|w| w.status.is_moving || w.status.is_resizing)
    }

    /// Non-minimized windows in list order.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowInstance> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Minimized windows in list order.
    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowInstance> {
        self.windows.iter().filter(|w| !w.is_visible())
    }

    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.container.width, self.config.mobile_breakpoint)
    }

    pub fn content(&self, id: &WindowId) -> Option<&C> {
        self.window(id).and_then(|w| self.portals.content(w.portal))
    }

    pub fn content_mut(&mut self, id: &WindowId) -> Option<&mut C> {
        let key = self.window(id)?.portal;
        self.portals.content_mut(key)
    }

    pub fn portals(&self) -> &PortalArena<C> {
        &self.portals
    }

    pub fn portals_mut(&mut self) -> &mut PortalArena<C> {
        &mut self.portals
    }

    // -- Internal helpers --

    pub(super) fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == *id)
    }

    pub(super) fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub(super) fn emit(&self, event: DeskEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

impl<C> std::fmt::Debug for WindowStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowStore")
            .field("windows", &self.windows)
            .field("container", &self.container)
            .field("config", &self.config)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
