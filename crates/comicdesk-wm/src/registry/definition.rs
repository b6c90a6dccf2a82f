use comicdesk_common::WindowId;
use serde::{Deserialize, Serialize};

use super::viewport::ViewportClass;
use crate::window::{ChromeOverrides, InitialStatus, WindowCreateParams};

/// Builds window content from the props of an open request.
pub type RenderFn<C> = Box<dyn Fn(&serde_json::Value) -> C>;

/// Placement rule for a definition: fixed, or chosen per viewport class.
#[derive(Debug, Clone)]
pub enum InitialStatusPolicy {
    Static(InitialStatus),
    Responsive(fn(ViewportClass) -> InitialStatus),
}

impl Default for InitialStatusPolicy {
    fn default() -> Self {
        InitialStatusPolicy::Static(InitialStatus::default())
    }
}

impl InitialStatusPolicy {
    pub fn resolve(&self, viewport: ViewportClass) -> InitialStatus {
        match self {
            InitialStatusPolicy::Static(status) => status.clone(),
            InitialStatusPolicy::Responsive(pick) => pick(viewport),
        }
    }
}

pub struct WindowDefinition<C> {
    pub key: String,
    pub title: Option<String>,
    pub chrome: ChromeOverrides,
    pub unique: bool,
    pub class_name: Option<String>,
    pub content_class_name: Option<String>,
    pub initial_status: InitialStatusPolicy,
    render: RenderFn<C>,
}

impl<C> WindowDefinition<C> {
    pub fn new(key: impl Into<String>, render: impl Fn(&serde_json::Value) -> C + 'static) -> Self {
        Self {
            key: key.into(),
            title: None,
            chrome: ChromeOverrides::default(),
            unique: false,
            class_name: None,
            content_class_name: None,
            initial_status: InitialStatusPolicy::default(),
            render: Box::new(render),
        }
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
        self.initial_status = InitialStatusPolicy::Static(status);
        self
    }

    pub fn with_responsive_status(mut self, pick: fn(ViewportClass) -> InitialStatus) -> Self {
        self.initial_status = InitialStatusPolicy::Responsive(pick);
        self
    }

    pub fn render(&self, props: &serde_json::Value) -> C {
        (self.render)(props)
    }

    /// Turn the definition plus request props into open parameters.
    /// Unique definitions open under their registry key.
    pub fn create_params(&self, props: &serde_json::Value, viewport: ViewportClass) -> WindowCreateParams<C> {
        WindowCreateParams {
            id: self.unique.then(|| WindowId::new(self.key.clone())),
            title: self.title.clone(),
            content: self.render(props),
            chrome: self.chrome,
            class_name: self.class_name.clone(),
            content_class_name: self.content_class_name.clone(),
            unique: self.unique,
            initial_status: self.initial_status.resolve(viewport),
        }
    }
}

impl<C> std::fmt::Debug for WindowDefinition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowDefinition")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("unique", &self.unique)
            .field("chrome", &self.chrome)
            .field("initial_status", &self.initial_status)
            .finish_non_exhaustive()
    }
}

/// Request to open a registered window by component key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRequest {
    pub component: String,
    #[serde(default)]
    pub props: serde_json::Value,
}

impl OpenRequest {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: serde_json::Value::Null,
        }
    }

    pub fn with_props(mut self, props: serde_json::Value) -> Self {
        self.props = props;
        self
    }
}
