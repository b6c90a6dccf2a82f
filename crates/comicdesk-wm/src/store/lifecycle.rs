//! Opening, updating, and closing windows.

use comicdesk_common::{DeskEvent, WindowId};
use tracing::{debug, warn};

use crate::geometry::{clamp, parse_measure, resolve_position_by_start};
use crate::registry::{OpenRequest, WindowRegistry};
use crate::window::{InitialStatus, RestoreStatus, WindowCreateParams, WindowInstance, WindowPatch, WindowStatus};

use super::focus::focus_in_list;
use super::WindowStore;

/// JS-style `a || b` for container dimensions: zero means "not measured".
fn or_unmeasured(value: f64, fallback: f64) -> f64 {
    if value == 0.0 {
        fallback
    } else {
        value
    }
}

impl<C> WindowStore<C> {
    /// Open a window and return its id.
    ///
    /// Re-opening an already open unique id updates that window in place
    /// and brings it back into focus instead of adding a second one.
    pub fn open_window(&mut self, params: WindowCreateParams<C>) -> WindowId {
        self.next_id += 1;
        let generated = WindowId::generated(self.next_id);

        if params.unique {
            if let Some(index) = params.id.as_ref().and_then(|id| self.index_of(id)) {
                return self.reopen(index, params);
            }
        }

        let id = match params.id {
            Some(ref id) if self.index_of(id).is_none() => id.clone(),
            Some(ref id) => {
                debug!(%id, "window id already open; generating a fresh one");
                self.unused_id(generated)
            }
            None => self.unused_id(generated),
        };

        let WindowCreateParams {
            title,
            content,
            chrome,
            class_name,
            content_class_name,
            unique,
            initial_status,
            ..
        } = params;

        let initial_status =
            initial_status.with_sizes_defaulted(self.config.default_width, self.config.default_height);
        let (status, restore_status) = self.resolve_initial_geometry(&initial_status);
        let portal = self.portals.create(content, content_class_name.clone());

        for window in &mut self.windows {
            window.status.is_focused = false;
        }

        debug!(
            %id,
            left = status.left,
            top = status.top,
            width = status.width,
            height = status.height,
            "window opened"
        );

        self.windows.push(WindowInstance {
            id: id.clone(),
            title,
            chrome: chrome.resolve(),
            class_name,
            content_class_name,
            unique,
            initial_status,
            status,
            restore_status,
            original_container_size: self.container,
            portal,
        });
        self.bump();
        self.emit(DeskEvent::WindowOpened(id.clone()));
        id
    }

    /// Open a registered window kind. Unknown keys are ignored.
    pub fn open_from_registry(&mut self, registry: &WindowRegistry<C>, request: &OpenRequest) -> Option<WindowId> {
        let Some(definition) = registry.get(&request.component) else {
            warn!(component = %request.component, "no window registered under this key");
            return None;
        };
        let params = definition.create_params(&request.props, self.viewport_class());
        Some(self.open_window(params))
    }

    /// Merge fields into an existing unique window without touching its geometry.
    fn reopen(&mut self, index: usize, params: WindowCreateParams<C>) -> WindowId {
        let WindowCreateParams {
            title,
            content,
            chrome,
            class_name,
            content_class_name,
            ..
        } = params;

        let window = &mut self.windows[index];
        if title.is_some() {
            window.title = title;
        }
        window.chrome = chrome.apply_to(window.chrome);
        if class_name.is_some() {
            window.class_name = class_name;
        }
        if content_class_name.is_some() {
            window.content_class_name = content_class_name;
            self.portals
                .set_class_name(window.portal, window.content_class_name.clone());
        }
        self.portals.replace_content(window.portal, content);

        window.status.is_minimized = false;
        let id = window.id.clone();
        focus_in_list(&mut self.windows, &id);

        debug!(%id, "unique window reopened");
        self.bump();
        self.emit(DeskEvent::WindowFocused(id.clone()));
        id
    }

    /// Compute the first geometry of a window from its initial status.
    fn resolve_initial_geometry(&self, initial: &InitialStatus) -> (WindowStatus, Option<RestoreStatus>) {
        let config = &self.config;
        let container = self.container;

        let width = clamp(
            parse_measure(initial.width.as_ref(), container.width, config.default_width),
            config.min_width,
            config.min_width.max(or_unmeasured(container.width, config.default_width)),
        );
        let height = clamp(
            parse_measure(initial.height.as_ref(), container.height, config.default_height),
            config.min_height,
            config.min_height.max(or_unmeasured(container.height, config.default_height)),
        );

        let start = resolve_position_by_start(initial.anchor(), width, height, container);
        let left = clamp(
            parse_measure(initial.left.as_ref(), container.width, start.left),
            0.0,
            (container.width - width).max(0.0),
        );
        let top = clamp(
            parse_measure(initial.top.as_ref(), container.height, start.top),
            0.0,
            (container.height - height).max(0.0),
        );

        let mut status = WindowStatus {
            is_moving: false,
            is_resizing: false,
            is_maximized: initial.is_maximized.unwrap_or(false),
            is_minimized: initial.is_minimized.unwrap_or(false),
            is_focused: initial.is_focused.unwrap_or(true),
            width,
            height,
            left,
            top,
        };

        let mut restore = None;
        if status.is_maximized {
            restore = Some(RestoreStatus::from(&status));
            if !container.is_empty() {
                status.set_rect(container.to_rect());
            }
        }
        (status, restore)
    }

    /// First free `window-N` id, starting from `candidate`.
    fn unused_id(&mut self, mut candidate: WindowId) -> WindowId {
        while self.index_of(&candidate).is_some() {
            self.next_id += 1;
            candidate = WindowId::generated(self.next_id);
        }
        candidate
    }

    /// Shallow-merge `patch` into a window. Geometry and status are untouched.
    pub fn update_window(&mut self, id: &WindowId, patch: WindowPatch<C>) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let WindowPatch {
            title,
            content,
            chrome,
            class_name,
            content_class_name,
        } = patch;

        let window = &mut self.windows[index];
        if title.is_some() {
            window.title = title;
        }
        window.chrome = chrome.apply_to(window.chrome);
        if class_name.is_some() {
            window.class_name = class_name;
        }
        if content_class_name.is_some() {
            window.content_class_name = content_class_name;
            self.portals
                .set_class_name(window.portal, window.content_class_name.clone());
        }
        if let Some(content) = content {
            self.portals.replace_content(window.portal, content);
        }

        self.bump();
        true
    }

    /// Remove a window and drop its content.
    ///
    /// If the closed window held focus, the last visible window takes it.
    /// Minimized windows are skipped, so focus may end up nowhere.
    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let removed = self.windows.remove(index);
        self.portals.remove(removed.portal);
        debug!(%id, remaining = self.windows.len(), "window closed");
        self.emit(DeskEvent::WindowClosed(id.clone()));

        let any_focused = self.windows.iter().any(|w| w.status.is_focused);
        if !any_focused {
            if let Some(last) = self.visible_windows().last().map(|w| w.id.clone()) {
                focus_in_list(&mut self.windows, &last);
                self.emit(DeskEvent::WindowFocused(last));
            }
        }

        self.bump();
        true
    }

    /// Close every window at once.
    pub fn clear_windows(&mut self) -> bool {
        if self.windows.is_empty() {
            return false;
        }
        let closed = std::mem::take(&mut self.windows);
        self.portals.clear();
        debug!(count = closed.len(), "all windows cleared");
        for window in closed {
            self.emit(DeskEvent::WindowClosed(window.id));
        }
        self.bump();
        true
    }
}
