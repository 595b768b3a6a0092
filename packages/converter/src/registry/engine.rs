//! Content engine that resolves section content using the registry.

use roxmltree::Node;

use super::core::ElementRegistry;
use super::types::ResolveContext;
use crate::xml::get_tag_name;

/// Engine that turns the children of a section node into wiki markup.
///
/// Text runs are copied verbatim and child elements are dispatched to
/// their registered handlers. Elements without a handler contribute
/// nothing; unknown markup is never an error.
pub struct ContentEngine {
    registry: ElementRegistry,
}

impl ContentEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Resolve the direct children of `node`, in document order.
    pub fn resolve(&self, node: Node<'_, '_>, context: &mut ResolveContext<'_>) -> String {
        let mut result = String::new();

        for child in node.children() {
            if child.is_text() {
                result.push_str(child.text().unwrap_or_default());
            } else if child.is_element() {
                match self.registry.get_handler(child, context) {
                    Some(handler) => result.push_str(&handler.handle(child, context).text),
                    None => {
                        tracing::debug!(
                            tag = %get_tag_name(child),
                            parent = %get_tag_name(node),
                            "No handler for element, skipping"
                        );
                        context.stats.skipped += 1;
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::handler::ElementHandler;
    use crate::registry::ParseResult;
    use roxmltree::Document;
    use std::collections::HashSet;

    struct UpperHandler;

    impl ElementHandler for UpperHandler {
        fn handle(&self, node: Node<'_, '_>, _context: &mut ResolveContext<'_>) -> ParseResult {
            ParseResult::new(node.text().unwrap_or_default().to_uppercase())
        }
    }

    fn engine() -> ContentEngine {
        let mut registry = ElementRegistry::new();
        registry.register("shout", UpperHandler);
        ContentEngine::new(registry)
    }

    #[test]
    fn test_resolve_mixed_content_in_order() {
        let doc = Document::parse("<intent>say <shout>hello</shout> twice</intent>").unwrap();
        let categories = HashSet::new();
        let mut context = ResolveContext::new(&categories);

        let text = engine().resolve(doc.root_element(), &mut context);
        assert_eq!(text, "say HELLO twice");
        assert_eq!(context.stats.skipped, 0);
    }

    #[test]
    fn test_resolve_skips_unknown_elements() {
        let doc = Document::parse("<intent>a<b>bold</b>c<!-- note -->d</intent>").unwrap();
        let categories = HashSet::new();
        let mut context = ResolveContext::new(&categories);

        let text = engine().resolve(doc.root_element(), &mut context);
        assert_eq!(text, "acd");
        assert_eq!(context.stats.skipped, 1);
    }

    #[test]
    fn test_resolve_empty_node() {
        let doc = Document::parse("<intent/>").unwrap();
        let categories = HashSet::new();
        let mut context = ResolveContext::new(&categories);

        assert_eq!(engine().resolve(doc.root_element(), &mut context), "");
        assert!(engine().registry().has_handler("shout"));
    }
}
