use serde::Serialize;

use super::login::LoginForm;
use super::reader::ReaderView;
use super::register::RegisterForm;
use super::test_window::TestPanel;

/// Live content of a window. Lives in the window's portal slot, so any
/// state in here (half-typed forms, reader position) survives minimize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowView {
    Login(LoginForm),
    Register(RegisterForm),
    Reader(ReaderView),
    Test(TestPanel),
}

impl WindowView {
    pub fn as_login_mut(&mut self) -> Option<&mut LoginForm> {
        match self {
            WindowView::Login(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_register_mut(&mut self) -> Option<&mut RegisterForm> {
        match self {
            WindowView::Register(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_reader_mut(&mut self) -> Option<&mut ReaderView> {
        match self {
            WindowView::Reader(view) => Some(view),
            _ => None,
        }
    }
}
