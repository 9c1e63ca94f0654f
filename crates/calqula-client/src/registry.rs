//! Component registry.

use std::collections::HashMap;

use crate::component::{Component, Props};

/// Registry mapping component tag names to implementations.
///
/// Registration is idempotent: registering a tag that already exists
/// replaces the previous component.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under a tag name, replacing any previous
    /// registration under the same tag.
    pub fn register(&mut self, tag: impl Into<String>, component: Box<dyn Component>) {
        let tag = tag.into();
        let replaced = self.components.insert(tag.clone(), component).is_some();
        tracing::debug!(tag = %tag, replaced, "component registered");
    }

    /// Look up a component by tag name.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn Component> {
        self.components.get(tag).map(|c| c.as_ref())
    }

    /// Render a registered component, or `None` when the tag is
    /// unknown.
    #[must_use]
    pub fn render(&self, tag: &str, props: &Props) -> Option<String> {
        self.get(tag).map(|component| component.render(props))
    }
}
