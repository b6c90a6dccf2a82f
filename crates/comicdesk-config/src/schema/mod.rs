//! Configuration schema types for comicdesk.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod compositor;
mod logging;
mod windows;

pub use compositor::*;
pub use logging::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DeskConfig {
    pub windows: WindowsConfig,
    pub compositor: CompositorConfig,
    pub logging: LoggingConfig,
}
