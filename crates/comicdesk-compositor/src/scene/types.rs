use comicdesk_common::{Rect, Size, WindowId};
use serde::Serialize;

/// Stacking level of the focused window.
pub const FOCUSED_Z: u32 = 60;

/// Stacking level of every other window.
pub const UNFOCUSED_Z: u32 = 50;

/// Stacking level of the minimized tray, above all windows.
pub const TRAY_Z: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Minimize,
    Maximize,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeButton {
    pub kind: ButtonKind,
    pub rect: Rect,
}

/// One visible window, fully laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowFrame {
    pub id: WindowId,
    /// Text for the title bar (or tray): the title, else the id.
    pub title: String,
    pub rect: Rect,
    pub z_index: u32,
    pub focused: bool,
    pub maximized: bool,
    pub moving: bool,
    pub resizing: bool,
    pub movable: bool,
    pub title_bar: Option<Rect>,
    pub buttons: Vec<ChromeButton>,
    pub content: Rect,
    pub resize_handle: Option<Rect>,
    pub class_name: Option<String>,
    pub content_class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayEntry {
    pub id: WindowId,
    pub title: String,
    pub rect: Rect,
}

/// Bottom bar listing minimized windows, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tray {
    pub rect: Rect,
    pub z_index: u32,
    pub entries: Vec<TrayEntry>,
}

/// Everything needed to paint one frame of the desk.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub container: Size,
    /// Visible frames, back to front.
    pub frames: Vec<WindowFrame>,
    /// Present only while at least one window is minimized.
    pub tray: Option<Tray>,
    /// Store revision this scene was built from.
    pub revision: u64,
}

impl Scene {
    pub fn frame(&self, id: &WindowId) -> Option<&WindowFrame> {
        self.frames.iter().find(|f| f.id == *id)
    }

    /// Frontmost frame, if any.
    pub fn top(&self) -> Option<&WindowFrame> {
        self.frames.last()
    }
}
