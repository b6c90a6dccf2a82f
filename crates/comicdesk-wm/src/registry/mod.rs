//! Registry of openable window kinds, keyed by component name.
//!
//! A definition knows how to build its content from JSON props and what
//! chrome and placement the window gets. Opening by key is the only way
//! application code asks for a registered window.

mod definition;
mod viewport;

pub use definition::{InitialStatusPolicy, OpenRequest, RenderFn, WindowDefinition};
pub use viewport::ViewportClass;

use std::collections::HashMap;

use tracing::warn;

/// All known window definitions producing content of type `C`.
pub struct WindowRegistry<C> {
    definitions: HashMap<String, WindowDefinition<C>>,
}

impl<C> Default for WindowRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowRegistry<C> {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add a definition. A later registration under the same key wins.
    pub fn register(&mut self, definition: WindowDefinition<C>) -> &mut Self {
        if self.definitions.contains_key(&definition.key) {
            warn!(key = %definition.key, "replacing window definition");
        }
        self.definitions.insert(definition.key.clone(), definition);
        self
    }

    pub fn get(&self, key: &str) -> Option<&WindowDefinition<C>> {
        self.definitions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<C> std::fmt::Debug for WindowRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Measure, StartAnchor};
    use crate::window::{ChromeOverrides, InitialStatus};
    use serde_json::json;

    fn greeting(props: &serde_json::Value) -> String {
        let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("stranger");
        format!("hello {name}")
    }

    fn login_status(viewport: ViewportClass) -> InitialStatus {
        match viewport {
            ViewportClass::Mobile => InitialStatus::anchored(StartAnchor::TopLeft).with_size("100%", "100%"),
            ViewportClass::Desktop => InitialStatus::anchored(StartAnchor::Center).with_size("60%", "80%"),
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = WindowRegistry::new();
        registry
            .register(WindowDefinition::new("Greeter", greeting).with_title("Greeter"))
            .register(WindowDefinition::new("Other", greeting));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Greeter"));
        assert!(registry.get("Missing").is_none());
        assert_eq!(registry.keys(), vec!["Greeter", "Other"]);
    }

    #[test]
    fn later_registration_replaces() {
        let mut registry = WindowRegistry::new();
        registry.register(WindowDefinition::new("A", greeting).with_title("first"));
        registry.register(WindowDefinition::new("A", greeting).with_title("second"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("A").unwrap().title.as_deref(), Some("second"));
    }

    #[test]
    fn render_uses_props() {
        let def = WindowDefinition::new("Greeter", greeting);
        assert_eq!(def.render(&json!({ "name": "Ana" })), "hello Ana");
        assert_eq!(def.render(&json!({})), "hello stranger");
    }

    #[test]
    fn unique_definitions_use_key_as_id() {
        let def = WindowDefinition::new("Login", greeting)
            .unique()
            .with_chrome(ChromeOverrides::locked());
        let params = def.create_params(&json!({}), ViewportClass::Desktop);
        assert_eq!(params.id.as_ref().map(|id| id.as_str()), Some("Login"));
        assert!(params.unique);
        assert_eq!(params.chrome.title_bar, Some(false));

        let plain = WindowDefinition::new("Test", greeting);
        assert!(plain.create_params(&json!({}), ViewportClass::Desktop).id.is_none());
    }

    #[test]
    fn responsive_policy_follows_viewport() {
        let def = WindowDefinition::new("Login", greeting).with_responsive_status(login_status);
        let mobile = def.create_params(&json!({}), ViewportClass::Mobile);
        let desktop = def.create_params(&json!({}), ViewportClass::Desktop);
        assert_eq!(mobile.initial_status.anchor(), StartAnchor::TopLeft);
        assert_eq!(mobile.initial_status.width, Some(Measure::from("100%")));
        assert_eq!(desktop.initial_status.anchor(), StartAnchor::Center);
        assert_eq!(desktop.initial_status.height, Some(Measure::from("80%")));
    }

    #[test]
    fn viewport_breakpoint() {
        assert_eq!(ViewportClass::from_width(375.0, 768.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0, 768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(0.0, 768.0), ViewportClass::Desktop);
    }
}
