//! Top-level desk state.
//!
//! Owns the window store, the compositor, and the window registry, and
//! drives the app-level flows (sign-in, registration, keyboard) on top
//! of them.

mod core;
mod flows;
mod keys;
mod snapshot;
mod types;


pub use keys::DeskKey;
pub use snapshot::{DeskSnapshot, ViewEntry};
pub use types::Desk;
