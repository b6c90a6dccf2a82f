//! Turns window store state into a paintable scene and routes pointer
//! input back into store calls.
//!
//! The compositor never owns windows. It is handed the store on every call,
//! builds frames (title bar, buttons, resize handle, content area) and the
//! minimized tray from the store's list, and mounts each window's portal
//! into its frame.

pub mod chrome;
pub mod compositor;
pub mod hit;
pub mod input;
pub mod scene;

pub use chrome::ChromeLayout;
pub use compositor::Compositor;
pub use hit::{cursor_zone, hit_test, CursorZone, HitTarget};
pub use input::{PointerButton, PointerEvent};
pub use scene::{build_scene, ButtonKind, ChromeButton, Scene, Tray, TrayEntry, WindowFrame};
