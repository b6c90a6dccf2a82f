use comicdesk_common::WindowId;

use super::types::{ChromeOverrides, InitialStatus};

/// Everything needed to open a window around some content `C`.
#[derive(Debug, Clone)]
pub struct WindowCreateParams<C> {
    /// Explicit id. Generated as `window-N` when absent.
    pub id: Option<WindowId>,
    pub title: Option<String>,
    pub content: C,
    pub chrome: ChromeOverrides,
    pub class_name: Option<String>,
    pub content_class_name: Option<String>,
    /// Re-opening a unique id updates the existing window instead of adding one.
    pub unique: bool,
    pub initial_status: InitialStatus,
}

impl<C> WindowCreateParams<C> {
    pub fn new(content: C) -> Self {
        Self {
            id: None,
            title: None,
            content,
            chrome: ChromeOverrides::default(),
            class_name: None,
            content_class_name: None,
            unique: false,
            initial_status: InitialStatus::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<WindowId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_chrome(mut self, chrome: ChromeOverrides) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_content_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.content_class_name = Some(class_name.into());
        self
    }

    pub fn with_initial_status(mut self, status: InitialStatus) -> Self {
        self.initial_status = status;
        self
    }
}

/// Partial update for an open window. Absent fields are left alone.
#[derive(Debug, Clone)]
pub struct WindowPatch<C> {
    pub title: Option<String>,
    pub content: Option<C>,
    pub chrome: ChromeOverrides,
    pub class_name: Option<String>,
    pub content_class_name: Option<String>,
}

impl<C> Default for WindowPatch<C> {
    fn default() -> Self {
        Self {
            title: None,
            content: None,
            chrome: ChromeOverrides::default(),
            class_name: None,
            content_class_name: None,
        }
    }
}

impl<C> WindowPatch<C> {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn content(content: C) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }
}
