//! Scene description handed to the painter.

mod build;
mod types;

pub use build::build_scene;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use comicdesk_common::{Size, WindowId};
    use comicdesk_wm::{ChromeOverrides, InitialStatus, StartAnchor, WindowCreateParams, WindowStore};

    use crate::chrome::ChromeLayout;

    fn store() -> WindowStore<&'static str> {
        let mut store = WindowStore::new();
        store.set_container_size(Size::new(1000.0, 800.0));
        store
    }

    fn open(store: &mut WindowStore<&'static str>, title: &str) -> WindowId {
        store.open_window(
            WindowCreateParams::new("content")
                .with_title(title)
                .with_initial_status(InitialStatus::anchored(StartAnchor::Center).with_size(400.0, 300.0)),
        )
    }

    #[test]
    fn empty_store_gives_empty_scene() {
        let scene = build_scene(&store(), &ChromeLayout::default());
        assert!(scene.frames.is_empty());
        assert!(scene.tray.is_none());
        assert_eq!(scene.container, Size::new(1000.0, 800.0));
    }

    #[test]
    fn focused_frame_paints_last() {
        let mut store = store();
        let a = open(&mut store, "A");
        let b = open(&mut store, "B");
        let c = open(&mut store, "C");
        store.focus_window(&a);

        let scene = build_scene(&store, &ChromeLayout::default());
        let order: Vec<&WindowId> = scene.frames.iter().map(|f| &f.id).collect();
        assert_eq!(order, vec![&b, &c, &a]);
        assert_eq!(scene.top().unwrap().z_index, FOCUSED_Z);
        assert_eq!(scene.frame(&b).unwrap().z_index, UNFOCUSED_Z);
    }

    #[test]
    fn list_order_breaks_ties() {
        let mut store = store();
        let a = open(&mut store, "A");
        let b = open(&mut store, "B");
        let c = open(&mut store, "C");
        // Minimizing the focused window leaves nothing focused
        store.set_window_minimized(&c, true);

        let scene = build_scene(&store, &ChromeLayout::default());
        let order: Vec<&WindowId> = scene.frames.iter().map(|f| &f.id).collect();
        assert_eq!(order, vec![&a, &b]);
        assert!(scene.frames.iter().all(|f| f.z_index == UNFOCUSED_Z));
    }

    #[test]
    fn minimized_windows_fill_tray_newest_first() {
        let mut store = store();
        let a = open(&mut store, "A");
        let b = open(&mut store, "B");
        let c = open(&mut store, "C");
        store.set_window_minimized(&a, true);
        store.set_window_minimized(&c, true);

        let scene = build_scene(&store, &ChromeLayout::default());
        assert_eq!(scene.frames.len(), 1);
        assert_eq!(scene.frames[0].id, b);

        let tray = scene.tray.as_ref().unwrap();
        assert_eq!(tray.z_index, TRAY_Z);
        let ids: Vec<&WindowId> = tray.entries.iter().map(|e| &e.id).collect();
        assert_eq!(ids, vec![&c, &a]);
        assert!(tray.entries[0].rect.x < tray.entries[1].rect.x);
        assert_eq!(tray.entries[1].title, "A");
    }

    #[test]
    fn frame_chrome_follows_capabilities() {
        let mut store = store();
        let locked = store.open_window(
            WindowCreateParams::new("login")
                .with_id("Login")
                .unique()
                .with_chrome(ChromeOverrides::locked()),
        );
        let scene = build_scene(&store, &ChromeLayout::default());
        let frame = scene.frame(&locked).unwrap();
        assert!(frame.title_bar.is_none());
        assert!(frame.buttons.is_empty());
        assert!(frame.resize_handle.is_none());
        assert_eq!(frame.content, frame.rect);
        assert_eq!(frame.title, "Login");
    }

    #[test]
    fn maximized_frame_fills_container_without_handle() {
        let mut store = store();
        let a = open(&mut store, "A");
        store.set_window_maximized(&a, true);
        let scene = build_scene(&store, &ChromeLayout::default());
        let frame = scene.frame(&a).unwrap();
        assert_eq!(frame.rect, Size::new(1000.0, 800.0).to_rect());
        assert!(frame.maximized);
        assert!(frame.resize_handle.is_none());
        assert!(frame.title_bar.is_some());
    }

    #[test]
    fn scene_serializes_to_json() {
        let mut store = store();
        open(&mut store, "Reader");
        let scene = build_scene(&store, &ChromeLayout::default());
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["frames"][0]["title"], "Reader");
        assert_eq!(json["frames"][0]["buttons"][2]["kind"], "close");
        assert!(json["tray"].is_null());
    }
}
