//! Floating window manager: geometry resolution, the window registry,
//! the window store state machine, and content-preserving portals.

pub mod commands;
pub mod geometry;
pub mod portal;
pub mod registry;
pub mod store;
pub mod window;

pub use commands::WindowCommand;
pub use geometry::{Measure, Position, StartAnchor};
pub use portal::{DisplayTarget, PortalArena, PortalKey};
pub use registry::{InitialStatusPolicy, OpenRequest, ViewportClass, WindowDefinition, WindowRegistry};
pub use store::{PointerDelta, StoreConfig, WindowStore};
pub use window::{
    Chrome, ChromeOverrides, InitialStatus, RestoreStatus, WindowCreateParams, WindowInstance,
    WindowPatch, WindowStatus,
};
