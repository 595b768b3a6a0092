//! Repository parser.
//!
//! Reads a pattern repository document into [`Repository`] entities.
//! Categories are parsed first so that links inside pattern sections can
//! be resolved against them.

mod access;
mod sections;

use roxmltree::{Document, Node, ParsingOptions};

use crate::config::{SectionVocabulary, REPOSITORY_ELEMENT};
use crate::error::{ConverterError, Result};
use crate::registry::{category_names, create_content_registry, ContentEngine, ResolveContext};
use crate::types::{Category, Pattern, Property, Repository};
use crate::xml::{field_text, find_children, get_tag_name, normalize_whitespace};

pub use access::{AccessPath, ACCESS_PATHS};
pub use sections::{extract_section, extract_with_path, flatten_text};

/// Parse a pattern repository from XML text.
///
/// # Errors
/// Returns `XmlParse` for malformed XML and `MissingField` when the
/// repository element, any category, or a required `name` is missing.
/// A document type declaration is accepted.
pub fn parse_repository(xml: &str, vocabulary: &SectionVocabulary) -> Result<Repository> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    parse_document(&doc, vocabulary)
}

/// Parse a pattern repository from an already parsed document.
pub fn parse_document(doc: &Document<'_>, vocabulary: &SectionVocabulary) -> Result<Repository> {
    let root = find_repository_element(doc)
        .ok_or_else(|| ConverterError::missing_field(REPOSITORY_ELEMENT, "document"))?;

    let categories = entries(root, "categories", "category")
        .enumerate()
        .map(|(index, category)| parse_category(category, index))
        .collect::<Result<Vec<_>>>()?;

    if categories.is_empty() {
        return Err(ConverterError::missing_field(
            "category",
            format!("<{REPOSITORY_ELEMENT}>/<categories>"),
        ));
    }

    let properties = entries(root, "properties", "property")
        .enumerate()
        .map(|(index, property)| parse_property(property, index))
        .collect::<Result<Vec<_>>>()?;

    let engine = ContentEngine::new(create_content_registry());
    let known_categories = category_names(&categories);
    let mut context = ResolveContext::new(&known_categories);

    let patterns = entries(root, "patterns", "pattern")
        .enumerate()
        .map(|(index, pattern)| parse_pattern(pattern, index, vocabulary, &engine, &mut context))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        categories = categories.len(),
        properties = properties.len(),
        patterns = patterns.len(),
        "Parsed pattern repository"
    );
    tracing::debug!(
        links = context.stats.links,
        category_links = context.stats.category_links,
        images = context.stats.images,
        skipped = context.stats.skipped,
        "Resolved section markup"
    );

    Ok(Repository {
        categories,
        properties,
        patterns,
    })
}

/// Find the repository element: the document root or its first descendant
/// with the repository tag name.
fn find_repository_element<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|node| node.is_element() && get_tag_name(*node) == REPOSITORY_ELEMENT)
}

/// Entry elements of every container block, in document order.
fn entries<'a, 'input>(
    root: Node<'a, 'input>,
    container: &'static str,
    entry: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    find_children(root, container).flat_map(move |block| find_children(block, entry))
}

/// Read a required, non-blank field.
fn required_field(node: Node<'_, '_>, field: &str, context: impl FnOnce() -> String) -> Result<String> {
    field_text(node, field)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ConverterError::missing_field(field, context()))
}

/// Read an optional field, trimmed. Absent fields are empty.
fn optional_field(node: Node<'_, '_>, field: &str) -> String {
    field_text(node, field)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Read an optional description with whitespace collapsed.
fn description(node: Node<'_, '_>) -> String {
    field_text(node, "description")
        .map(|text| normalize_whitespace(&text))
        .unwrap_or_default()
}

fn parse_category(node: Node<'_, '_>, index: usize) -> Result<Category> {
    let name = required_field(node, "name", || format!("<category> #{}", index + 1))?;
    let category = Category::new(&name, optional_field(node, "parent"), description(node));
    tracing::debug!(name = %category.name, parent = %category.parent, "Parsed category");
    Ok(category)
}

fn parse_property(node: Node<'_, '_>, index: usize) -> Result<Property> {
    let name = required_field(node, "name", || format!("<property> #{}", index + 1))?;
    let property = Property::new(&name, optional_field(node, "type"), description(node));
    tracing::debug!(name = %property.name, type_name = %property.type_name, "Parsed property");
    Ok(property)
}

fn parse_pattern(
    node: Node<'_, '_>,
    index: usize,
    vocabulary: &SectionVocabulary,
    engine: &ContentEngine,
    context: &mut ResolveContext<'_>,
) -> Result<Pattern> {
    let name = required_field(node, "name", || format!("<pattern> #{}", index + 1))?;
    let category = optional_field(node, "category");

    let mut sections = vocabulary.instantiate();
    for section in &mut sections {
        section.text = extract_section(node, &section.name, engine, context);
    }

    tracing::debug!(
        name = %name,
        category = %category,
        filled = sections.iter().filter(|s| !s.text.is_empty()).count(),
        "Parsed pattern"
    );

    Ok(Pattern {
        name,
        category,
        sections,
    })
}
