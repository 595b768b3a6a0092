//! Registry configuration for pattern section content.

use super::core::ElementRegistry;
use super::handlers::{ImageHandler, LinkHandler};

/// Create a content registry for pattern section markup.
///
/// Only `link` and `image` produce output. Any other element inside a
/// section is dropped by the engine.
#[must_use]
pub fn create_content_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.register("link", LinkHandler);
    registry.register("image", ImageHandler);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_content_registry() {
        let registry = create_content_registry();

        assert!(registry.has_handler("link"));
        assert!(registry.has_handler("image"));
        assert!(!registry.has_handler("b"));
    }
}
