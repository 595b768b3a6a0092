//! Core data types for the converter.
//!
//! These types represent the entities of a pattern repository. They are
//! built once by the parser and only read afterwards.

use std::fmt;

use crate::config::{sections, SectionSpec, CATEGORY_PREFIX, PROPERTY_PREFIX};

/// A category page, e.g. `Category:Cloud Offerings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Prefixed page name (`Category:<name>`).
    pub name: String,

    /// Unprefixed name of the containing category. Empty for the root.
    pub parent: String,

    /// Whitespace-normalized description.
    pub raw_text: String,
}

impl Category {
    /// Create a category from its unprefixed name.
    #[must_use]
    pub fn new(
        name: impl AsRef<str>,
        parent: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            name: format!("{CATEGORY_PREFIX}{}", name.as_ref()),
            parent: parent.into(),
            raw_text: raw_text.into(),
        }
    }

    /// The name without the `Category:` prefix.
    ///
    /// # Examples
    /// ```
    /// use patternpedia_converter::types::Category;
    ///
    /// let category = Category::new("Cloud Offerings", "Cloud Computing Patterns", "");
    /// assert_eq!(category.name, "Category:Cloud Offerings");
    /// assert_eq!(category.name_without_prefix(), "Cloud Offerings");
    /// ```
    #[must_use]
    pub fn name_without_prefix(&self) -> &str {
        self.name.strip_prefix(CATEGORY_PREFIX).unwrap_or(&self.name)
    }

    /// Whether this category has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}

/// A semantic property page, e.g. `Property:HasAuthor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Prefixed page name (`Property:<name>`).
    pub name: String,

    /// Free-form type tag, e.g. `Page` or `Text`.
    pub type_name: String,

    /// Whitespace-normalized description.
    pub raw_text: String,
}

impl Property {
    /// Create a property from its unprefixed name.
    #[must_use]
    pub fn new(
        name: impl AsRef<str>,
        type_name: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            name: format!("{PROPERTY_PREFIX}{}", name.as_ref()),
            type_name: type_name.into(),
            raw_text: raw_text.into(),
        }
    }

    /// The name without the `Property:` prefix.
    #[must_use]
    pub fn name_without_prefix(&self) -> &str {
        self.name.strip_prefix(PROPERTY_PREFIX).unwrap_or(&self.name)
    }
}

/// One named content slot of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name from the configured vocabulary.
    pub name: String,

    /// Resolved, newline-flattened content. May be empty.
    pub text: String,

    /// Render `[[`-delimited fragments as a bullet list.
    pub render_ul: bool,
}

impl Section {
    /// Create an empty section from its configuration.
    #[must_use]
    pub fn from_spec(spec: &SectionSpec) -> Self {
        Self {
            name: spec.name.clone(),
            text: String::new(),
            render_ul: spec.render_ul,
        }
    }
}

/// A pattern page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Unprefixed page name.
    pub name: String,

    /// Unprefixed name of the owning category.
    pub category: String,

    /// One section per configured section name, in configured order.
    pub sections: Vec<Section>,
}

impl Pattern {
    /// Look up a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// File name of the pattern icon, or an empty string.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.section(sections::ICON)
            .map(|section| section.text.as_str())
            .unwrap_or_default()
    }
}

/// A typed cross-reference, rendered as `[[kind::target|label]]`.
///
/// # Examples
/// ```
/// use patternpedia_converter::types::TypedLink;
///
/// let link = TypedLink::new("Has related pattern", "Elasticity Manager", "elasticity manager");
/// assert_eq!(
///     link.to_string(),
///     "[[Has related pattern::Elasticity Manager|elasticity manager]]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedLink {
    /// Semantic type tag (property name).
    pub kind: String,

    /// Link target page.
    pub target: String,

    /// Visible text.
    pub label: String,
}

impl TypedLink {
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for TypedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}::{}|{}]]", self.kind, self.target, self.label)
    }
}

/// All entities parsed from one repository document.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    /// Categories in document order. The first one is the root.
    pub categories: Vec<Category>,

    /// Properties in document order.
    pub properties: Vec<Property>,

    /// Patterns in document order.
    pub patterns: Vec<Pattern>,
}

impl Repository {
    /// The root category (the first category in the document).
    #[must_use]
    pub fn root(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Look up a pattern by name.
    #[must_use]
    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.name == name)
    }

    /// Icon file of the named pattern, or an empty string if the pattern
    /// is unknown or has no icon.
    #[must_use]
    pub fn pattern_icon(&self, name: &str) -> &str {
        self.pattern(name).map(Pattern::icon).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_with_icon(name: &str, icon: &str) -> Pattern {
        Pattern {
            name: name.to_string(),
            category: "Cloud Offerings".to_string(),
            sections: vec![
                Section {
                    name: "intent".to_string(),
                    text: "Scale out".to_string(),
                    render_ul: false,
                },
                Section {
                    name: "icon".to_string(),
                    text: icon.to_string(),
                    render_ul: false,
                },
            ],
        }
    }

    #[test]
    fn test_category_prefix() {
        let category = Category::new("Cloud Offerings", "Root", "Offerings");
        assert_eq!(category.name, "Category:Cloud Offerings");
        assert_eq!(category.name_without_prefix(), "Cloud Offerings");
        assert!(!category.is_root());
        assert!(Category::new("Root", "", "").is_root());
    }

    #[test]
    fn test_property_prefix() {
        let property = Property::new("HasAuthor", "Page", "The author");
        assert_eq!(property.name, "Property:HasAuthor");
        assert_eq!(property.name_without_prefix(), "HasAuthor");
    }

    #[test]
    fn test_section_from_spec() {
        let spec = SectionSpec {
            name: "known-uses".to_string(),
            render_ul: true,
        };
        let section = Section::from_spec(&spec);
        assert_eq!(section.name, "known-uses");
        assert!(section.text.is_empty());
        assert!(section.render_ul);
    }

    #[test]
    fn test_pattern_icon() {
        let pattern = pattern_with_icon("Elastic Platform", "elastic_platform.png");
        assert_eq!(pattern.icon(), "elastic_platform.png");
        assert_eq!(pattern.section("intent").unwrap().text, "Scale out");
        assert!(pattern.section("missing").is_none());
    }

    #[test]
    fn test_typed_link_display() {
        let link = TypedLink::new("Has category", "Category:Cloud Offerings", "offerings");
        assert_eq!(
            link.to_string(),
            "[[Has category::Category:Cloud Offerings|offerings]]"
        );
    }

    #[test]
    fn test_repository_lookups() {
        let repository = Repository {
            categories: vec![
                Category::new("Root", "", ""),
                Category::new("Cloud Offerings", "Root", ""),
            ],
            properties: Vec::new(),
            patterns: vec![pattern_with_icon("Elastic Platform", "elastic_platform.png")],
        };

        assert_eq!(repository.root().unwrap().name_without_prefix(), "Root");
        assert_eq!(
            repository.pattern_icon("Elastic Platform"),
            "elastic_platform.png"
        );
        assert_eq!(repository.pattern_icon("Unknown"), "");
    }
}
