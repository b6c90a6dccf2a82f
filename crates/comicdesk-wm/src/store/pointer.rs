//! Pointer-driven dragging for WindowStore.

use tracing::{debug, trace};

use crate::geometry::clamp;

use super::{PointerDelta, WindowStore};

impl<C> WindowStore<C> {
    /// Apply one pointer movement to the window being moved or resized.
    ///
    /// Moves stay inside the container. Resizes keep the window between the
    /// minimum size and the container edge. A window flagged for both only
    /// moves. Zero movement is a no-op.
    pub fn mouse_capture(&mut self, delta: PointerDelta) -> bool {
        let delta = delta.sanitized();
        if delta.is_zero() {
            return false;
        }

        let container = self.container;
        let config = self.config;
        let mut changed = false;

        let moving = self.windows.iter().position(|w| w.status.is_moving);
        if let Some(index) = moving {
            let status = &mut self.windows[index].status;
            let left = clamp(status.left + delta.dx, 0.0, (container.width - status.width).max(0.0));
            let top = clamp(status.top + delta.dy, 0.0, (container.height - status.height).max(0.0));
            changed |= left != status.left || top != status.top;
            status.left = left;
            status.top = top;
        }

        let resizing = self
            .windows
            .iter()
            .position(|w| w.status.is_resizing)
            .filter(|&index| Some(index) != moving);
        if let Some(index) = resizing {
            let status = &mut self.windows[index].status;
            let width = clamp(
                status.width + delta.dx,
                config.min_width,
                config.min_width.max(container.width - status.left),
            );
            let height = clamp(
                status.height + delta.dy,
                config.min_height,
                config.min_height.max(container.height - status.top),
            );
            changed |= width != status.width || height != status.height;
            status.width = width;
            status.height = height;
        }

        if changed {
            trace!(dx = delta.dx, dy = delta.dy, "pointer drag applied");
            self.bump();
        }
        changed
    }

    /// End any move or resize, whichever window holds it.
    pub fn remove_moving_resizing(&mut self) -> bool {
        let mut changed = false;
        for window in &mut self.windows {
            if window.status.is_moving || window.status.is_resizing {
                window.status.is_moving = false;
                window.status.is_resizing = false;
                changed = true;
            }
        }
        if changed {
            debug!("pointer capture released");
            self.bump();
        }
        changed
    }
}
