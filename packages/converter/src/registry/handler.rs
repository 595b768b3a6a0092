//! Element handler trait definition.

use roxmltree::Node;

use super::types::{ParseResult, ResolveContext};

/// Trait for inline element handlers.
///
/// A handler turns one child element of a section into wiki markup.
pub trait ElementHandler: Send + Sync {
    /// Check if this handler can process the given element.
    ///
    /// Default implementation always returns true.
    fn can_handle(&self, _node: Node<'_, '_>, _context: &ResolveContext<'_>) -> bool {
        true
    }

    /// Process the element and return its markup.
    fn handle(&self, node: Node<'_, '_>, context: &mut ResolveContext<'_>) -> ParseResult;
}
