//! Command dispatch for WindowStore.

use crate::commands::WindowCommand;

use super::WindowStore;

impl<C> WindowStore<C> {
    /// Execute a window command. Returns true if state changed.
    pub fn execute(&mut self, cmd: WindowCommand) -> bool {
        match cmd {
            WindowCommand::Focus(id) => self.focus_window(&id),
            WindowCommand::Close(id) => self.close_window(&id),
            WindowCommand::Minimize(id) => self.set_window_minimized(&id, true),
            WindowCommand::Restore(id) => self.set_window_minimized(&id, false),
            WindowCommand::ToggleMaximize(id) => self.toggle_maximized(&id),
            WindowCommand::Move(id) => self.set_window_moving(&id, true),
            WindowCommand::Resize(id) => self.set_window_resizing(&id, true),
            WindowCommand::Drag(delta) => self.mouse_capture(delta),
            WindowCommand::Release => self.remove_moving_resizing(),
            WindowCommand::CloseFocused => match self.focused().map(|w| w.id.clone()) {
                Some(id) => self.close_window(&id),
                None => false,
            },
            WindowCommand::MinimizeFocused => match self.focused().map(|w| w.id.clone()) {
                Some(id) => self.set_window_minimized(&id, true),
                None => false,
            },
            WindowCommand::CloseAll => self.clear_windows(),
        }
    }
}
