//! Hit testing against a built scene.

use comicdesk_common::WindowId;

use crate::scene::{ButtonKind, Scene, WindowFrame};

/// What lies under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    Button(WindowId, ButtonKind),
    ResizeHandle(WindowId),
    TitleBar(WindowId),
    Content(WindowId),
    TrayEntry(WindowId),
    /// Empty tray space.
    Tray,
    /// Nothing but the desk.
    Desk,
}

impl HitTarget {
    /// The window this target belongs to, if it is part of a frame.
    pub fn frame_id(&self) -> Option<&WindowId> {
        match self {
            HitTarget::Button(id, _)
            | HitTarget::ResizeHandle(id)
            | HitTarget::TitleBar(id)
            | HitTarget::Content(id) => Some(id),
            _ => None,
        }
    }
}

/// Find the topmost target at `(x, y)`.
///
/// The tray sits above every window. Frames are checked front to back;
/// within a frame buttons win over the resize handle, which wins over the
/// title bar.
pub fn hit_test(scene: &Scene, x: f64, y: f64) -> HitTarget {
    if let Some(tray) = &scene.tray {
        if tray.rect.contains(x, y) {
            return tray
                .entries
                .iter()
                .find(|e| e.rect.contains(x, y))
                .map(|e| HitTarget::TrayEntry(e.id.clone()))
                .unwrap_or(HitTarget::Tray);
        }
    }

    scene
        .frames
        .iter()
        .rev()
        .find(|f| f.rect.contains(x, y))
        .map(|frame| hit_frame(frame, x, y))
        .unwrap_or(HitTarget::Desk)
}

fn hit_frame(frame: &WindowFrame, x: f64, y: f64) -> HitTarget {
    let id = frame.id.clone();
    if let Some(button) = frame.buttons.iter().find(|b| b.rect.contains(x, y)) {
        return HitTarget::Button(id, button.kind);
    }
    if frame.resize_handle.is_some_and(|r| r.contains(x, y)) {
        return HitTarget::ResizeHandle(id);
    }
    if frame.title_bar.is_some_and(|r| r.contains(x, y)) {
        return HitTarget::TitleBar(id);
    }
    HitTarget::Content(id)
}

/// Pointer shape to show over a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    Default,
    Grab,
    Grabbing,
    SeResize,
    Pointer,
}

pub fn cursor_zone(scene: &Scene, target: &HitTarget) -> CursorZone {
    match target {
        HitTarget::TitleBar(id) => match scene.frame(id) {
            Some(frame) if frame.movable && frame.moving => CursorZone::Grabbing,
            Some(frame) if frame.movable => CursorZone::Grab,
            _ => CursorZone::Default,
        },
        HitTarget::ResizeHandle(_) => CursorZone::SeResize,
        HitTarget::Button(..) | HitTarget::TrayEntry(_) => CursorZone::Pointer,
        _ => CursorZone::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::ChromeLayout;
    use crate::scene::build_scene;
    use comicdesk_common::Size;
    use comicdesk_wm::{InitialStatus, StartAnchor, WindowCreateParams, WindowStore};

    /// Two overlapping 400x300 windows: `a` at (100,100), `b` at (300,200).
    fn scene() -> (Scene, WindowId, WindowId) {
        let mut store = WindowStore::new();
        store.set_container_size(Size::new(1000.0, 800.0));
        let open = |store: &mut WindowStore<()>, left: f64, top: f64| {
            store.open_window(
                WindowCreateParams::new(()).with_initial_status(
                    InitialStatus::anchored(StartAnchor::TopLeft)
                        .with_size(400.0, 300.0)
                        .with_position(left, top),
                ),
            )
        };
        let a = open(&mut store, 100.0, 100.0);
        let b = open(&mut store, 300.0, 200.0);
        (build_scene(&store, &ChromeLayout::default()), a, b)
    }

    #[test]
    fn empty_space_is_desk() {
        let (scene, _, _) = scene();
        assert_eq!(hit_test(&scene, 5.0, 5.0), HitTarget::Desk);
    }

    #[test]
    fn front_frame_wins_overlap() {
        let (scene, a, b) = scene();
        assert_eq!(hit_test(&scene, 350.0, 350.0), HitTarget::Content(b));
        assert_eq!(hit_test(&scene, 150.0, 200.0), HitTarget::Content(a));
    }

    #[test]
    fn title_bar_and_buttons() {
        let (scene, a, b) = scene();
        assert_eq!(hit_test(&scene, 150.0, 110.0), HitTarget::TitleBar(a));
        // b's close button: right edge 700 - 8, 28px wide, 6px down from the top
        assert_eq!(hit_test(&scene, 680.0, 215.0), HitTarget::Button(b, ButtonKind::Close));
    }

    #[test]
    fn resize_handle_beats_content() {
        let (scene, _, b) = scene();
        assert_eq!(hit_test(&scene, 695.0, 495.0), HitTarget::ResizeHandle(b));
    }

    #[test]
    fn cursor_zones() {
        let (scene, a, b) = scene();
        assert_eq!(cursor_zone(&scene, &HitTarget::TitleBar(a)), CursorZone::Grab);
        assert_eq!(cursor_zone(&scene, &HitTarget::ResizeHandle(b.clone())), CursorZone::SeResize);
        assert_eq!(cursor_zone(&scene, &HitTarget::Content(b)), CursorZone::Default);
        assert_eq!(cursor_zone(&scene, &HitTarget::Desk), CursorZone::Default);
    }

    #[test]
    fn frame_id_only_for_frame_parts() {
        let id = WindowId::from("x");
        assert_eq!(HitTarget::TitleBar(id.clone()).frame_id(), Some(&id));
        assert_eq!(HitTarget::TrayEntry(id).frame_id(), None);
        assert_eq!(HitTarget::Desk.frame_id(), None);
    }
}
