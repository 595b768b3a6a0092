//! Pattern section extraction.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use super::access::AccessPath;
use crate::registry::{ContentEngine, ResolveContext};

/// Regex matching one space in front of clause punctuation.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([,.;:])").expect("valid regex"));

/// Flatten resolved section text onto one line.
///
/// Newlines become spaces, tabs are deleted, and a space directly in front
/// of `,` `.` `;` or `:` is removed.
///
/// # Examples
/// ```
/// use patternpedia_converter::parser::flatten_text;
///
/// assert_eq!(flatten_text("Scale\n\tout , then in ."), "Scale out, then in.");
/// ```
pub fn flatten_text(text: &str) -> String {
    let text = text.replace('\n', " ").replace('\t', "");
    SPACE_BEFORE_PUNCTUATION.replace_all(&text, "$1").into_owned()
}

/// Resolve the content of every node below `pattern` addressed by `path`.
///
/// Matches are concatenated in document order.
pub fn extract_with_path(
    pattern: Node<'_, '_>,
    path: AccessPath<'_>,
    engine: &ContentEngine,
    context: &mut ResolveContext<'_>,
) -> String {
    pattern
        .descendants()
        .skip(1)
        .filter(|node| path.matches(*node))
        .map(|node| engine.resolve(node, context))
        .collect()
}

/// Extract and flatten the content of one section of a pattern.
///
/// The configured access path is tried first; when it yields nothing the
/// section name itself is used as element name.
pub fn extract_section(
    pattern: Node<'_, '_>,
    section_name: &str,
    engine: &ContentEngine,
    context: &mut ResolveContext<'_>,
) -> String {
    let path = AccessPath::for_section(section_name);
    let mut text = extract_with_path(pattern, path, engine, context);

    let fallback = AccessPath::Element(section_name);
    if text.is_empty() && path != fallback {
        tracing::debug!(
            section = section_name,
            "Access path yielded no content, retrying with section name"
        );
        text = extract_with_path(pattern, fallback, engine, context);
    }

    flatten_text(&text)
}
