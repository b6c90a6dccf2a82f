use comicdesk_common::{Size, WindowId};
use comicdesk_wm::{ChromeOverrides, DisplayTarget, InitialStatus, StartAnchor, WindowCreateParams, WindowStore};

use super::*;

fn desk() -> (Compositor, WindowStore<String>) {
    let mut compositor = Compositor::default();
    let mut store = WindowStore::new();
    compositor.observe_container(&mut store, Size::new(1000.0, 800.0));
    (compositor, store)
}

/// 400x300 window at (left, top).
fn open_at(store: &mut WindowStore<String>, left: f64, top: f64) -> WindowId {
    store.open_window(
        WindowCreateParams::new(String::from("page")).with_initial_status(
            InitialStatus::anchored(StartAnchor::TopLeft)
                .with_size(400.0, 300.0)
                .with_position(left, top),
        ),
    )
}

fn down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button: PointerButton::Primary,
    }
}

#[test]
fn observe_container_sets_store_size() {
    let (_, store) = desk();
    assert_eq!(store.container_size(), Size::new(1000.0, 800.0));
}

#[test]
fn title_bar_drag_moves_window() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);

    assert!(compositor.handle_pointer(&mut store, down(150.0, 110.0)));
    assert!(store.window(&id).unwrap().status.is_moving);
    assert!(compositor.handle_pointer(&mut store, PointerEvent::Move { dx: 30.0, dy: 20.0 }));
    assert!(compositor.handle_pointer(&mut store, PointerEvent::Up));

    let s = store.window(&id).unwrap().status;
    assert!((s.left - 130.0).abs() < 1e-9);
    assert!((s.top - 120.0).abs() < 1e-9);
    assert!(!s.is_moving);
}

#[test]
fn secondary_button_only_focuses() {
    let (mut compositor, mut store) = desk();
    let a = open_at(&mut store, 100.0, 100.0);
    open_at(&mut store, 600.0, 100.0);

    let event = PointerEvent::Down {
        x: 150.0,
        y: 110.0,
        button: PointerButton::Secondary,
    };
    assert!(compositor.handle_pointer(&mut store, event));
    let s = store.window(&a).unwrap().status;
    assert!(s.is_focused);
    assert!(!s.is_moving);
}

#[test]
fn pressing_content_focuses_back_window() {
    let (mut compositor, mut store) = desk();
    let a = open_at(&mut store, 100.0, 100.0);
    let b = open_at(&mut store, 300.0, 200.0);

    compositor.handle_pointer(&mut store, down(150.0, 300.0));
    assert!(store.window(&a).unwrap().status.is_focused);
    assert!(!store.window(&b).unwrap().status.is_focused);

    // Focus repaints a on top
    let scene = compositor.render(&mut store);
    assert_eq!(scene.top().unwrap().id, a);
}

#[test]
fn resize_handle_drag_resizes() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    compositor.handle_pointer(&mut store, down(495.0, 395.0));
    assert!(store.window(&id).unwrap().status.is_resizing);
    compositor.handle_pointer(&mut store, PointerEvent::Move { dx: 50.0, dy: 40.0 });
    compositor.handle_pointer(&mut store, PointerEvent::Leave);

    let s = store.window(&id).unwrap().status;
    assert!((s.width - 450.0).abs() < 1e-9);
    assert!((s.height - 340.0).abs() < 1e-9);
    assert!(!s.is_resizing);
}

#[test]
fn blur_releases_stuck_drag() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    compositor.handle_pointer(&mut store, down(150.0, 110.0));
    assert!(compositor.handle_pointer(&mut store, PointerEvent::Blur));
    assert!(!store.window(&id).unwrap().status.is_moving);
}

#[test]
fn pressing_immovable_title_bar_does_not_drag() {
    let (mut compositor, mut store) = desk();
    let id = store.open_window(
        WindowCreateParams::new(String::from("x"))
            .with_chrome(ChromeOverrides {
                movable: Some(false),
                ..Default::default()
            })
            .with_initial_status(InitialStatus::anchored(StartAnchor::TopLeft).with_size(400.0, 300.0)),
    );
    compositor.handle_pointer(&mut store, down(50.0, 10.0));
    assert!(!store.window(&id).unwrap().status.is_moving);
}

#[test]
fn buttons_minimize_maximize_close() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    // Buttons for a frame spanning x 100..500: close 464..492, maximize 432..460, minimize 400..428
    let button_y = 120.0;

    assert!(compositor.handle_pointer(&mut store, PointerEvent::Click { x: 445.0, y: button_y }));
    assert!(store.window(&id).unwrap().status.is_maximized);
    // Maximized frame now spans the container
    assert!(compositor.handle_pointer(&mut store, PointerEvent::Click { x: 945.0, y: 20.0 }));
    assert!(!store.window(&id).unwrap().status.is_maximized);

    assert!(compositor.handle_pointer(&mut store, PointerEvent::Click { x: 410.0, y: button_y }));
    assert!(store.window(&id).unwrap().status.is_minimized);

    let scene = compositor.render(&mut store);
    let entry = scene.tray.as_ref().unwrap().entries[0].rect;
    assert!(compositor.handle_pointer(
        &mut store,
        PointerEvent::Click {
            x: entry.x + 1.0,
            y: entry.y + 1.0
        }
    ));
    assert!(!store.window(&id).unwrap().status.is_minimized);

    assert!(compositor.handle_pointer(&mut store, PointerEvent::Click { x: 470.0, y: button_y }));
    assert!(store.is_empty());
}

#[test]
fn double_click_title_bar_toggles_maximize() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    assert!(compositor.handle_pointer(&mut store, PointerEvent::DoubleClick { x: 150.0, y: 110.0 }));
    assert!(store.window(&id).unwrap().status.is_maximized);
    assert!(compositor.handle_pointer(&mut store, PointerEvent::DoubleClick { x: 150.0, y: 10.0 }));
    let s = store.window(&id).unwrap().status;
    assert!(!s.is_maximized);
    assert!((s.left - 100.0).abs() < 1e-9);
}

#[test]
fn clicks_on_desk_do_nothing() {
    let (mut compositor, mut store) = desk();
    open_at(&mut store, 100.0, 100.0);
    let revision = store.revision();
    assert!(!compositor.handle_pointer(&mut store, PointerEvent::Click { x: 900.0, y: 700.0 }));
    assert!(!compositor.handle_pointer(&mut store, down(900.0, 700.0)));
    assert_eq!(store.revision(), revision);
}

#[test]
fn render_mounts_visible_and_parks_minimized() {
    let (mut compositor, mut store) = desk();
    let a = open_at(&mut store, 100.0, 100.0);
    let b = open_at(&mut store, 300.0, 200.0);
    store.set_window_minimized(&a, true);

    let content_b = compositor.render(&mut store).frame(&b).unwrap().content;
    let key_a = store.window(&a).unwrap().portal;
    let key_b = store.window(&b).unwrap().portal;
    assert_eq!(store.portals().target(key_a), Some(DisplayTarget::Offscreen));
    assert_eq!(store.portals().target(key_b), Some(DisplayTarget::Frame(content_b)));
    assert_eq!(store.portals().visible_count(), 1);
}

#[test]
fn content_survives_minimize_round_trip() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    compositor.render(&mut store);
    store.content_mut(&id).unwrap().push_str(" 12");

    store.set_window_minimized(&id, true);
    compositor.render(&mut store);
    store.set_window_minimized(&id, false);
    compositor.render(&mut store);

    assert_eq!(store.content(&id).map(String::as_str), Some("page 12"));
    let key = store.window(&id).unwrap().portal;
    assert!(store.portals().target(key).unwrap().is_visible());
}

#[test]
fn render_skips_unchanged_store() {
    let (mut compositor, mut store) = desk();
    let id = open_at(&mut store, 100.0, 100.0);
    compositor.render(&mut store);
    let key = store.window(&id).unwrap().portal;
    let retargets = store.portals().retargets(key);

    compositor.render(&mut store);
    assert_eq!(store.portals().retargets(key), retargets);
    assert_eq!(compositor.scene().revision, store.revision());
}
