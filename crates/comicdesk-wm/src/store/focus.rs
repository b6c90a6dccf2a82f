//! Focus handling for WindowStore.

use comicdesk_common::{DeskEvent, WindowId};
use tracing::debug;

use crate::window::WindowInstance;

use super::WindowStore;

/// Focus `id` and blur everything else. Returns true if any flag changed.
pub(super) fn focus_in_list(windows: &mut [WindowInstance], id: &WindowId) -> bool {
    let mut changed = false;
    for window in windows {
        let focused = window.id == *id;
        if window.status.is_focused != focused {
            window.status.is_focused = focused;
            changed = true;
        }
    }
    changed
}

impl<C> WindowStore<C> {
    /// Give `id` focus. List order (and so creation order) is unchanged.
    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        if !focus_in_list(&mut self.windows, id) {
            return false;
        }
        debug!(%id, "window focused");
        self.bump();
        self.emit(DeskEvent::WindowFocused(id.clone()));
        true
    }

    /// Focus the topmost visible window, if any.
    pub fn focus_topmost(&mut self) -> bool {
        match self.visible_windows().last().map(|w| w.id.clone()) {
            Some(id) => self.focus_window(&id),
            None => false,
        }
    }
}
