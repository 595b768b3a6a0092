//! Inline element handlers for section content.
//!
//! These handlers process the markup elements that may appear inside a
//! pattern section: typed links (`link`) and embedded images (`image`).

use roxmltree::Node;

use crate::config::{CATEGORY_PREFIX, CONTENT_IMAGE_WIDTH};
use crate::registry::handler::ElementHandler;
use crate::registry::types::{ParseResult, ResolveContext};
use crate::types::TypedLink;
use crate::xml::deep_text;

/// Handler for `<link>` elements.
///
/// Emits a typed cross-reference `[[type::target|text]]`. The target is the
/// `target` attribute, falling back to the link text. A target naming a
/// known category is rewritten to its `Category:` page; any other target
/// is kept verbatim.
pub struct LinkHandler;

impl ElementHandler for LinkHandler {
    fn handle(&self, node: Node<'_, '_>, context: &mut ResolveContext<'_>) -> ParseResult {
        let label = deep_text(node).trim().to_string();
        let kind = node.attribute("type").unwrap_or_default();
        let target = node.attribute("target").unwrap_or(&label);

        let target = if context.is_category(target) {
            context.stats.category_links += 1;
            format!("{CATEGORY_PREFIX}{target}")
        } else {
            target.to_string()
        };
        context.stats.links += 1;

        ParseResult::new(TypedLink::new(kind, target, label).to_string())
    }
}

/// Handler for `<image>` elements.
///
/// Emits a fixed-width embedded file reference.
pub struct ImageHandler;

impl ElementHandler for ImageHandler {
    fn handle(&self, node: Node<'_, '_>, context: &mut ResolveContext<'_>) -> ParseResult {
        let file = deep_text(node);
        context.stats.images += 1;
        ParseResult::new(format!(
            "[[File:{}|{CONTENT_IMAGE_WIDTH}]]",
            file.trim()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::category_names;
    use crate::types::Category;
    use roxmltree::Document;

    fn handle_link(xml: &str) -> (String, usize) {
        let categories = category_names(&[
            Category::new("Cloud Computing Patterns", "", ""),
            Category::new("Foo", "Cloud Computing Patterns", ""),
        ]);
        let mut context = ResolveContext::new(&categories);
        let doc = Document::parse(xml).unwrap();
        let result = LinkHandler.handle(doc.root_element(), &mut context);
        (result.text, context.stats.category_links)
    }

    #[test]
    fn test_link_target_resolves_to_category() {
        let (text, rewritten) = handle_link(r#"<link type="Has category" target="Foo">foo things</link>"#);
        assert_eq!(text, "[[Has category::Category:Foo|foo things]]");
        assert_eq!(rewritten, 1);
    }

    #[test]
    fn test_link_target_without_category_is_verbatim() {
        let (text, rewritten) = handle_link(r#"<link type="Has related pattern" target="Bar">bar</link>"#);
        assert_eq!(text, "[[Has related pattern::Bar|bar]]");
        assert_eq!(rewritten, 0);
    }

    #[test]
    fn test_link_text_is_fallback_target() {
        let (text, _) = handle_link(r#"<link type="Has related pattern"> Elastic Platform </link>"#);
        assert_eq!(
            text,
            "[[Has related pattern::Elastic Platform|Elastic Platform]]"
        );
    }

    #[test]
    fn test_link_text_fallback_resolves_category() {
        let (text, rewritten) = handle_link(r#"<link type="Has category">Foo</link>"#);
        assert_eq!(text, "[[Has category::Category:Foo|Foo]]");
        assert_eq!(rewritten, 1);
    }

    #[test]
    fn test_link_without_type() {
        let (text, _) = handle_link(r#"<link target="Bar">bar</link>"#);
        assert_eq!(text, "[[::Bar|bar]]");
    }

    #[test]
    fn test_image() {
        let categories = category_names(&[]);
        let mut context = ResolveContext::new(&categories);
        let doc = Document::parse("<image> architecture.png </image>").unwrap();

        let result = ImageHandler.handle(doc.root_element(), &mut context);
        assert_eq!(result.text, "[[File:architecture.png|850px]]");
        assert_eq!(context.stats.images, 1);
    }
}
