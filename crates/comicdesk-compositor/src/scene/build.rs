use comicdesk_wm::{WindowInstance, WindowStore};
use tracing::trace;

use super::types::{Scene, Tray, TrayEntry, WindowFrame, FOCUSED_Z, TRAY_Z, UNFOCUSED_Z};
use crate::chrome::ChromeLayout;

/// Lay out every window in `store`.
///
/// Frames are ordered back to front: unfocused windows in list order, then
/// the focused one. Minimized windows go to the tray, newest first.
pub fn build_scene<C>(store: &WindowStore<C>, layout: &ChromeLayout) -> Scene {
    let mut frames: Vec<WindowFrame> = store
        .visible_windows()
        .map(|window| build_frame(window, layout))
        .collect();
    // Stable, so list order breaks ties
    frames.sort_by_key(|f| f.z_index);

    let minimized: Vec<&WindowInstance> = store.minimized_windows().collect();
    let tray = (!minimized.is_empty()).then(|| {
        let rect = layout.tray_rect(store.container_size());
        let entries = minimized
            .iter()
            .rev()
            .enumerate()
            .map(|(index, window)| TrayEntry {
                id: window.id.clone(),
                title: window.display_title().to_string(),
                rect: layout.tray_entry_rect(rect, index),
            })
            .collect();
        Tray {
            rect,
            z_index: TRAY_Z,
            entries,
        }
    });

    trace!(
        frames = frames.len(),
        minimized = minimized.len(),
        revision = store.revision(),
        "scene built"
    );

    Scene {
        container: store.container_size(),
        frames,
        tray,
        revision: store.revision(),
    }
}

fn build_frame(window: &WindowInstance, layout: &ChromeLayout) -> WindowFrame {
    let status = &window.status;
    let chrome = &window.chrome;
    let rect = status.rect();

    WindowFrame {
        id: window.id.clone(),
        title: window.display_title().to_string(),
        rect,
        z_index: if status.is_focused { FOCUSED_Z } else { UNFOCUSED_Z },
        focused: status.is_focused,
        maximized: status.is_maximized,
        moving: status.is_moving,
        resizing: status.is_resizing,
        movable: chrome.movable,
        title_bar: chrome.title_bar.then(|| layout.title_bar_rect(rect)),
        buttons: layout.buttons(rect, chrome),
        content: layout.content_rect(rect, chrome.title_bar),
        resize_handle: window.shows_resize_handle().then(|| layout.resize_handle_rect(rect)),
        class_name: window.class_name.clone(),
        content_class_name: window.content_class_name.clone(),
    }
}
