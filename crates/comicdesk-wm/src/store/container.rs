//! Re-fitting windows when the container changes size.

use comicdesk_common::{DeskEvent, Size};
use tracing::{debug, trace};

use crate::geometry::{clamp, parse_measure, resolve_position_by_start};
use crate::window::WindowInstance;

use super::{StoreConfig, WindowStore};

impl<C> WindowStore<C> {
    /// Record a new container size and bring every window back inside it.
    ///
    /// Maximized windows are pinned to the new size. Windows that still fit
    /// keep their geometry. Windows that no longer fit are rescaled by the
    /// ratio to the size they were last laid out against (or re-anchored
    /// when that size was never measured), shrunk to fit where possible,
    /// then clamped inside. An empty size (either side zero) is recorded
    /// without touching any window.
    ///
    /// This runs mid-drag too: a window being moved is refitted like any
    /// other and keeps its capture flag.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        if size == self.container {
            return false;
        }
        self.container = size;
        self.bump();
        self.emit(DeskEvent::ContainerResized(size));

        if size.is_empty() {
            debug!(%size, "container not measured yet; windows left as is");
            return true;
        }

        let config = self.config;
        for window in &mut self.windows {
            refit(window, size, &config);
        }
        debug!(%size, windows = self.windows.len(), "container resized");
        true
    }
}

fn refit(window: &mut WindowInstance, size: Size, config: &StoreConfig) {
    let status = &mut window.status;

    if status.is_maximized {
        status.left = 0.0;
        status.top = 0.0;
        status.width = size.width;
        status.height = size.height;
        window.original_container_size = size;
        return;
    }

    if status.fits_within(size) {
        window.original_container_size = size;
        return;
    }

    // Windows never drop below the minimum, even in a tiny container
    status.width = clamp(status.width, config.min_width, config.min_width.max(size.width));
    status.height = clamp(status.height, config.min_height, config.min_height.max(size.height));

    let original = window.original_container_size;
    let (left, top) = if !original.is_empty() {
        (
            status.left * size.width / original.width,
            status.top * size.height / original.height,
        )
    } else {
        let initial = &window.initial_status;
        let start = resolve_position_by_start(initial.anchor(), status.width, status.height, size);
        (
            parse_measure(initial.left.as_ref(), size.width, start.left),
            parse_measure(initial.top.as_ref(), size.height, start.top),
        )
    };

    status.left = clamp(left, 0.0, (size.width - status.width).max(0.0));
    status.top = clamp(top, 0.0, (size.height - status.height).max(0.0));
    window.original_container_size = size;

    trace!(id = %window.id, left = status.left, top = status.top, "window refitted");
}
