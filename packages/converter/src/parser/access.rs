//! Section access paths.
//!
//! Most sections live in an element named after the section. A few are
//! stored under a different element, listed in [`ACCESS_PATHS`].

use roxmltree::Node;

use crate::xml::get_tag_name;

/// How to find the content node(s) of a section inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPath<'a> {
    /// Elements with this tag name.
    Element(&'a str),

    /// `<patternsection name="...">` elements.
    NamedSection(&'a str),
}

/// Section names whose content is not stored under their own name.
pub const ACCESS_PATHS: &[(&str, AccessPath<'static>)] = &[
    ("context", AccessPath::NamedSection("Context")),
    ("solution", AccessPath::NamedSection("Solution")),
    ("related-patterns", AccessPath::NamedSection("Related Patterns")),
    ("consider-next", AccessPath::Element("globallinks")),
];

impl<'a> AccessPath<'a> {
    /// Access path for a section name.
    ///
    /// # Examples
    /// ```
    /// use patternpedia_converter::parser::AccessPath;
    ///
    /// assert_eq!(AccessPath::for_section("intent"), AccessPath::Element("intent"));
    /// assert_eq!(AccessPath::for_section("context"), AccessPath::NamedSection("Context"));
    /// ```
    #[must_use]
    pub fn for_section(section_name: &'a str) -> Self {
        for (name, path) in ACCESS_PATHS {
            if *name == section_name {
                return *path;
            }
        }
        AccessPath::Element(section_name)
    }

    /// Whether an element node is addressed by this path.
    #[must_use]
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            Self::Element(tag) => get_tag_name(node) == *tag,
            Self::NamedSection(label) => {
                get_tag_name(node) == "patternsection" && node.attribute("name") == Some(*label)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_for_section_table_entries() {
        assert_eq!(
            AccessPath::for_section("solution"),
            AccessPath::NamedSection("Solution")
        );
        assert_eq!(
            AccessPath::for_section("related-patterns"),
            AccessPath::NamedSection("Related Patterns")
        );
        assert_eq!(
            AccessPath::for_section("consider-next"),
            AccessPath::Element("globallinks")
        );
    }

    #[test]
    fn test_for_section_defaults_to_own_name() {
        assert_eq!(
            AccessPath::for_section("known-uses"),
            AccessPath::Element("known-uses")
        );
    }

    #[test]
    fn test_matches_named_section() {
        let xml = r#"<pattern><patternsection name="Context">c</patternsection><patternsection name="Solution">s</patternsection></pattern>"#;
        let doc = Document::parse(xml).unwrap();
        let children: Vec<_> = doc.root_element().children().collect();

        let path = AccessPath::NamedSection("Context");
        assert!(path.matches(children[0]));
        assert!(!path.matches(children[1]));
    }

    #[test]
    fn test_matches_element() {
        let doc = Document::parse("<pattern><intent>i</intent>text</pattern>").unwrap();
        let children: Vec<_> = doc.root_element().children().collect();

        let path = AccessPath::Element("intent");
        assert!(path.matches(children[0]));
        assert!(!path.matches(children[1]));
    }
}
