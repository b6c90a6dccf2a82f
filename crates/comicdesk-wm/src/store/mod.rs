//! The window store: the single source of truth for open windows.
//!
//! The store owns the ordered window list, the container size, and the
//! portal arena holding every window's content. Each public method is one
//! synchronous transition and reports whether anything changed.

mod container;
mod dispatch;
mod focus;
mod lifecycle;
mod pointer;
mod status;
mod types;

pub use types::*;
