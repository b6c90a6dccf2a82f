use comicdesk_wm::{ChromeOverrides, InitialStatus, StartAnchor, ViewportClass, WindowDefinition};
use serde::Serialize;

use super::view::WindowView;
use super::REGISTER_KEY;

/// Account creation form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub display_name: String,
    #[serde(skip)]
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub error: Option<String>,
}

impl RegisterForm {
    pub fn submit(&mut self) -> bool {
        let required = [&self.email, &self.username, &self.display_name, &self.password];
        if required.iter().any(|field| field.trim().is_empty()) {
            self.error = Some("all fields are required".into());
            return false;
        }
        if self.password != self.confirm_password {
            self.error = Some("passwords do not match".into());
            return false;
        }
        self.error = None;
        true
    }
}

fn initial_status(viewport: ViewportClass) -> InitialStatus {
    match viewport {
        ViewportClass::Mobile => InitialStatus::anchored(StartAnchor::TopLeft).with_size("100%", "100%"),
        // "auto" height resolves to the default window height
        ViewportClass::Desktop => InitialStatus::anchored(StartAnchor::Center).with_size("48%", "auto"),
    }
}

pub(super) fn definition() -> WindowDefinition<WindowView> {
    WindowDefinition::new(REGISTER_KEY, |_: &serde_json::Value| {
        WindowView::Register(RegisterForm::default())
    })
    .with_title("Register")
    .unique()
    .with_chrome(ChromeOverrides::locked())
    .with_content_class_name("h-full w-full")
    .with_responsive_status(initial_status)
}
