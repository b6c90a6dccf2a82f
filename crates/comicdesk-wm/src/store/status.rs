//! Move/resize capture flags, minimize and maximize.

use comicdesk_common::{DeskEvent, WindowId};
use tracing::debug;

use crate::window::RestoreStatus;

use super::focus::focus_in_list;
use super::WindowStore;

impl<C> WindowStore<C> {
    /// Start or stop moving `id`. Ignored for maximized or immovable windows.
    ///
    /// Starting a move on one window ends any move on the others.
    pub fn set_window_moving(&mut self, id: &WindowId, moving: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let window = &self.windows[index];
        if window.status.is_maximized || !window.chrome.movable {
            return false;
        }

        let mut changed = false;
        for (i, window) in self.windows.iter_mut().enumerate() {
            let wanted = if i == index { moving } else { window.status.is_moving && !moving };
            if window.status.is_moving != wanted {
                window.status.is_moving = wanted;
                changed = true;
            }
        }
        if changed {
            debug!(%id, moving, "move capture changed");
            self.bump();
        }
        changed
    }

    /// Start or stop resizing `id`. Ignored for maximized or fixed-size windows.
    ///
    /// Starting a resize on one window ends any resize on the others.
    pub fn set_window_resizing(&mut self, id: &WindowId, resizing: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let window = &self.windows[index];
        if window.status.is_maximized || !window.chrome.resizable {
            return false;
        }

        let mut changed = false;
        for (i, window) in self.windows.iter_mut().enumerate() {
            let wanted = if i == index { resizing } else { window.status.is_resizing && !resizing };
            if window.status.is_resizing != wanted {
                window.status.is_resizing = wanted;
                changed = true;
            }
        }
        if changed {
            debug!(%id, resizing, "resize capture changed");
            self.bump();
        }
        changed
    }

    /// Minimize or restore `id`.
    ///
    /// Restoring focuses the window. Minimizing only drops its own focus;
    /// no other window is focused in its place (closing does hand focus on).
    pub fn set_window_minimized(&mut self, id: &WindowId, minimized: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let status = &mut self.windows[index].status;
        let before = *status;
        status.is_minimized = minimized;
        status.is_moving = false;
        status.is_resizing = false;
        status.is_focused = !minimized;
        let mut changed = *status != before;

        if !minimized {
            changed |= focus_in_list(&mut self.windows, id);
        }
        if !changed {
            return false;
        }

        debug!(%id, minimized, "window minimize changed");
        self.bump();
        if minimized {
            self.emit(DeskEvent::WindowMinimized(id.clone()));
        } else {
            self.emit(DeskEvent::WindowRestored(id.clone()));
        }
        true
    }

    /// Maximize `id` to the full container, or put it back where it was.
    ///
    /// Requires the `maximizable` capability. Asking for the state the
    /// window is already in does nothing, so a second maximize never
    /// overwrites the saved geometry.
    pub fn set_window_maximized(&mut self, id: &WindowId, maximized: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let container = self.container;
        let window = &mut self.windows[index];
        if !window.chrome.maximizable || window.status.is_maximized == maximized {
            return false;
        }

        let status = &mut window.status;
        if maximized {
            window.restore_status = Some(RestoreStatus::from(&*status));
            status.is_maximized = true;
            status.is_moving = false;
            status.is_resizing = false;
            status.left = 0.0;
            status.top = 0.0;
            // An unmeasured container keeps the current size
            if container.width != 0.0 {
                status.width = container.width;
            }
            if container.height != 0.0 {
                status.height = container.height;
            }
        } else {
            status.is_maximized = false;
            if let Some(restore) = window.restore_status.take() {
                status.is_moving = false;
                status.is_resizing = false;
                status.width = restore.width;
                status.height = restore.height;
                status.left = restore.left;
                status.top = restore.top;
            }
        }

        debug!(%id, maximized, "window maximize changed");
        self.bump();
        if maximized {
            self.emit(DeskEvent::WindowMaximized(id.clone()));
        } else {
            self.emit(DeskEvent::WindowUnmaximized(id.clone()));
        }
        true
    }

    pub fn toggle_maximized(&mut self, id: &WindowId) -> bool {
        match self.window(id) {
            Some(window) => {
                let maximized = window.status.is_maximized;
                self.set_window_maximized(id, !maximized)
            }
            None => false,
        }
    }
}
