//! The compositor: owns chrome layout and the last built scene, and drives
//! a [`WindowStore`] from container and pointer events.

use comicdesk_common::Size;
use comicdesk_config::schema::CompositorConfig;
use comicdesk_wm::{PointerDelta, WindowStore};
use tracing::{debug, trace};

use crate::chrome::ChromeLayout;
use crate::hit::{hit_test, HitTarget};
use crate::input::{PointerButton, PointerEvent};
use crate::scene::{build_scene, ButtonKind, Scene};

pub struct Compositor {
    layout: ChromeLayout,
    scene: Scene,
    /// Store revision `scene` was built from.
    rendered: Option<u64>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(ChromeLayout::default())
    }
}

impl Compositor {
    pub fn new(layout: ChromeLayout) -> Self {
        Self {
            layout,
            scene: Scene::default(),
            rendered: None,
        }
    }

    pub fn from_config(config: &CompositorConfig) -> Self {
        Self::new(ChromeLayout::from_config(config))
    }

    pub fn layout(&self) -> &ChromeLayout {
        &self.layout
    }

    /// The last scene built by [`Compositor::render`].
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Feed a measured container size into the store.
    pub fn observe_container<C>(&mut self, store: &mut WindowStore<C>, size: Size) -> bool {
        store.set_container_size(size)
    }

    /// Rebuild the scene if the store changed, and mount every visible
    /// window's content into its frame. Minimized content is parked
    /// off-screen, never dropped.
    pub fn render<C>(&mut self, store: &mut WindowStore<C>) -> &Scene {
        if self.rendered == Some(store.revision()) {
            return &self.scene;
        }

        self.scene = build_scene(store, &self.layout);
        self.rendered = Some(store.revision());

        let mut retargeted = 0usize;
        for index in 0..store.len() {
            let window = &store.windows()[index];
            let key = window.portal;
            let frame = self.scene.frame(&window.id).map(|f| f.content);
            let changed = match frame {
                Some(content) => store.portals_mut().show(key, content),
                None => store.portals_mut().hide(key),
            };
            retargeted += usize::from(changed);
        }
        trace!(revision = self.scene.revision, retargeted, "scene rendered");

        &self.scene
    }

    /// Translate one pointer event into store calls. Returns true if the
    /// store changed.
    pub fn handle_pointer<C>(&mut self, store: &mut WindowStore<C>, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y, button } => {
                let target = self.target_at(store, x, y);
                let Some(id) = target.frame_id().cloned() else {
                    return false;
                };
                let mut changed = false;
                if button == PointerButton::Primary {
                    changed |= match target {
                        HitTarget::TitleBar(_) => store.set_window_moving(&id, true),
                        HitTarget::ResizeHandle(_) => store.set_window_resizing(&id, true),
                        _ => false,
                    };
                }
                changed |= store.focus_window(&id);
                changed
            }
            PointerEvent::Move { dx, dy } => store.mouse_capture(PointerDelta::new(dx, dy)),
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Blur => store.remove_moving_resizing(),
            PointerEvent::Click { x, y } => match self.target_at(store, x, y) {
                HitTarget::Button(id, kind) => {
                    debug!(%id, ?kind, "chrome button clicked");
                    match kind {
                        ButtonKind::Minimize => store.set_window_minimized(&id, true),
                        ButtonKind::Maximize => store.toggle_maximized(&id),
                        ButtonKind::Close => store.close_window(&id),
                    }
                }
                HitTarget::TrayEntry(id) => store.set_window_minimized(&id, false),
                _ => false,
            },
            PointerEvent::DoubleClick { x, y } => match self.target_at(store, x, y) {
                HitTarget::TitleBar(id) => store.toggle_maximized(&id),
                _ => false,
            },
        }
    }

    fn target_at<C>(&mut self, store: &mut WindowStore<C>, x: f64, y: f64) -> HitTarget {
        hit_test(self.render(store), x, y)
    }
}

#[cfg(test)]
mod tests;
