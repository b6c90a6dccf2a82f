use comicdesk_wm::{InitialStatus, StartAnchor, WindowDefinition};
use serde::{Deserialize, Serialize};

use super::view::WindowView;
use super::TEST_KEY;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Scratch window used to exercise the window manager by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPanel {
    pub message: String,
    pub right_presses: u32,
}

impl TestPanel {
    pub fn press_right(&mut self) {
        self.right_presses += 1;
    }
}

pub(super) fn definition() -> WindowDefinition<WindowView> {
    WindowDefinition::new(TEST_KEY, |props: &serde_json::Value| {
        let props: TestProps = serde_json::from_value(props.clone()).unwrap_or_default();
        WindowView::Test(TestPanel {
            message: props
                .message
                .unwrap_or_else(|| "A floating test window.".to_string()),
            right_presses: 0,
        })
    })
    .with_title("Test Window")
    .with_content_class_name("h-full w-full")
    .with_initial_status(InitialStatus::anchored(StartAnchor::Center).with_size(640.0, 420.0))
}
