//! Chrome geometry for the compositor.

use serde::{Deserialize, Serialize};

/// Sizes of the window chrome and the minimized-window tray, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Height of the draggable title bar (valid range: 16-120).
    pub title_bar_height: f64,
    /// Side length of the minimize/maximize/close buttons (valid range: 8-64).
    pub button_size: f64,
    /// Gap between chrome buttons (valid range: 0-32).
    pub button_gap: f64,
    /// Side length of the bottom-right resize handle (valid range: 4-64).
    pub resize_handle_size: f64,
    /// Height of the minimized-window tray (valid range: 16-160).
    pub tray_height: f64,
    /// Width of one tray entry (valid range: 40-600).
    pub tray_entry_width: f64,
    /// Gap between tray entries and around the tray edge (valid range: 0-32).
    pub tray_gap: f64,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            title_bar_height: 40.0,
            button_size: 28.0,
            button_gap: 4.0,
            resize_handle_size: 16.0,
            tray_height: 48.0,
            tray_entry_width: 180.0,
            tray_gap: 8.0,
        }
    }
}
