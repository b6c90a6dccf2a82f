//! The application's window kinds.
//!
//! [`AppWindow`] is the closed set of windows the app can open, each with
//! its own props type. It maps onto the string-keyed registry the window
//! store understands, so call sites never build registry keys by hand.

mod login;
mod reader;
mod register;
mod test_window;
mod view;

pub use login::LoginForm;
pub use reader::{ReaderProps, ReaderView};
pub use register::RegisterForm;
pub use test_window::{TestPanel, TestProps};
pub use view::WindowView;

use comicdesk_wm::{OpenRequest, WindowRegistry};
use serde::{Deserialize, Serialize};

pub const LOGIN_KEY: &str = "LoginWindow";
pub const REGISTER_KEY: &str = "RegisterWindow";
pub const READER_KEY: &str = "ReaderWindow";
pub const TEST_KEY: &str = "TestWindow";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "props")]
pub enum AppWindow {
    #[serde(rename = "LoginWindow")]
    Login,
    #[serde(rename = "RegisterWindow")]
    Register,
    #[serde(rename = "ReaderWindow")]
    Reader(ReaderProps),
    #[serde(rename = "TestWindow")]
    Test(TestProps),
}

impl AppWindow {
    pub fn key(&self) -> &'static str {
        match self {
            AppWindow::Login => LOGIN_KEY,
            AppWindow::Register => REGISTER_KEY,
            AppWindow::Reader(_) => READER_KEY,
            AppWindow::Test(_) => TEST_KEY,
        }
    }

    pub fn open_request(&self) -> OpenRequest {
        let props = match self {
            AppWindow::Login | AppWindow::Register => Ok(serde_json::Value::Null),
            AppWindow::Reader(props) => serde_json::to_value(props),
            AppWindow::Test(props) => serde_json::to_value(props),
        };
        OpenRequest::new(self.key()).with_props(props_or_null(self.key(), props))
    }
}

/// Unserializable props open the window with its defaults.
fn props_or_null(key: &str, props: serde_json::Result<serde_json::Value>) -> serde_json::Value {
    props.unwrap_or_else(|e| {
        tracing::warn!(window = key, "Failed to serialize window props, using defaults: {e}");
        serde_json::Value::Null
    })
}

/// Registry with every window kind the app knows.
pub fn registry() -> WindowRegistry<WindowView> {
    let mut registry = WindowRegistry::new();
    registry
        .register(login::definition())
        .register(register::definition())
        .register(reader::definition())
        .register(test_window::definition());
    registry
}
