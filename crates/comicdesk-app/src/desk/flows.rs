use comicdesk_common::WindowId;

use crate::windows::{AppWindow, LOGIN_KEY, REGISTER_KEY};

use super::types::Desk;

impl Desk {
    /// Submit the sign-in form. Closes the window once the form is valid.
    pub fn submit_login(&mut self) -> bool {
        let id = WindowId::new(LOGIN_KEY);
        let Some(form) = self.store.content_mut(&id).and_then(|v| v.as_login_mut()) else {
            return false;
        };
        if !form.submit() {
            tracing::debug!(error = ?form.error, "Login rejected");
            return false;
        }
        tracing::info!(email = %form.email, "Login submitted");
        self.store.close_window(&id)
    }

    /// Submit the registration form. On success the sign-in window takes
    /// its place.
    pub fn submit_register(&mut self) -> bool {
        let id = WindowId::new(REGISTER_KEY);
        let Some(form) = self.store.content_mut(&id).and_then(|v| v.as_register_mut()) else {
            return false;
        };
        if !form.submit() {
            tracing::debug!(error = ?form.error, "Registration rejected");
            return false;
        }
        tracing::info!(username = %form.username, "Account registered");
        self.open(&AppWindow::Login);
        self.store.close_window(&id)
    }

    /// Swap the sign-in window for the registration window.
    pub fn switch_to_register(&mut self) -> Option<WindowId> {
        let opened = self.open(&AppWindow::Register)?;
        self.store.close_window(&WindowId::new(LOGIN_KEY));
        Some(opened)
    }
}
