use comicdesk_common::WindowId;

use crate::store::PointerDelta;

/// Requests that keyboard shortcuts, menus, and the compositor send to
/// the window store.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Focus(WindowId),
    Close(WindowId),
    Minimize(WindowId),
    Restore(WindowId),
    ToggleMaximize(WindowId),
    /// Begin moving the window with the pointer.
    Move(WindowId),
    /// Begin resizing the window with the pointer.
    Resize(WindowId),
    Drag(PointerDelta),
    Release,
    CloseFocused,
    MinimizeFocused,
    CloseAll,
}

impl WindowCommand {
    /// Parse a command name as used in key bindings (`close_focused`).
    /// Only commands that need no argument can be parsed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "release" => Some(WindowCommand::Release),
            "close_focused" => Some(WindowCommand::CloseFocused),
            "minimize_focused" => Some(WindowCommand::MinimizeFocused),
            "close_all" => Some(WindowCommand::CloseAll),
            _ => None,
        }
    }
}
