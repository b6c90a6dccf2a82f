//! Application layer for comicdesk: the window kinds the reader ships
//! with and the desk that ties the window store to the compositor.

pub mod desk;
pub mod windows;

pub use desk::{Desk, DeskKey, DeskSnapshot, ViewEntry};
pub use windows::{AppWindow, WindowView};
