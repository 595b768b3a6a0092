//! Element registry for mapping tag names to handlers.

use std::collections::HashMap;

use roxmltree::Node;

use super::handler::ElementHandler;
use super::types::ResolveContext;
use crate::xml::get_tag_name;

/// Registry mapping inline element names to handlers.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ElementHandler>>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Get the handler for an element, if one is registered and accepts it.
    pub fn get_handler(
        &self,
        node: Node<'_, '_>,
        context: &ResolveContext<'_>,
    ) -> Option<&dyn ElementHandler> {
        self.handlers
            .get(get_tag_name(node))
            .filter(|h| h.can_handle(node, context))
            .map(|h| h.as_ref())
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
