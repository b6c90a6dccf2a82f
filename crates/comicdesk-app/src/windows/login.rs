use comicdesk_wm::{ChromeOverrides, InitialStatus, StartAnchor, ViewportClass, WindowDefinition};
use serde::Serialize;

use super::view::WindowView;
use super::LOGIN_KEY;

/// Sign-in form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    /// Check the form before sending it. Records the error on the form.
    pub fn submit(&mut self) -> bool {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            self.error = Some("email and password are required".into());
            return false;
        }
        self.error = None;
        true
    }
}

fn initial_status(viewport: ViewportClass) -> InitialStatus {
    match viewport {
        ViewportClass::Mobile => InitialStatus::anchored(StartAnchor::TopLeft).with_size("100%", "100%"),
        ViewportClass::Desktop => InitialStatus::anchored(StartAnchor::Center).with_size("60%", "80%"),
    }
}

pub(super) fn definition() -> WindowDefinition<WindowView> {
    WindowDefinition::new(LOGIN_KEY, |_: &serde_json::Value| WindowView::Login(LoginForm::default()))
        .with_title("Login")
        .unique()
        .with_chrome(ChromeOverrides::locked())
        .with_content_class_name("h-full w-full flex items-center justify-center")
        .with_responsive_status(initial_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        let mut form = LoginForm {
            email: "  ".into(),
            password: "secret".into(),
            error: None,
        };
        assert!(!form.submit());
        assert!(form.error.is_some());

        form.email = "reader@example.com".into();
        assert!(form.submit());
        assert!(form.error.is_none());
    }

    #[test]
    fn password_is_never_serialized() {
        let form = LoginForm {
            email: "a@b.c".into(),
            password: "hunter2".into(),
            error: None,
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn definition_is_locked_and_unique() {
        let def = definition();
        assert!(def.unique);
        let chrome = def.chrome.resolve();
        assert!(!chrome.title_bar && !chrome.closeable && !chrome.movable);
    }
}
