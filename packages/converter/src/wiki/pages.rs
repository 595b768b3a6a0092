//! Wiki pages for repository entities.

use super::text::ul_list;
use crate::types::{Category, Pattern, Property, Section};

/// A titled wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub text: String,
}

impl Page {
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Description followed by the parent category marker, if any.
#[must_use]
pub fn category_text(category: &Category) -> String {
    if category.parent.is_empty() {
        category.raw_text.clone()
    } else {
        format!("{}[[Category:{}]]", category.raw_text, category.parent)
    }
}

/// Description followed by the property's type annotation.
#[must_use]
pub fn property_text(property: &Property) -> String {
    format!("{}[[Has type::{}| ]]", property.raw_text, property.type_name)
}

/// A `{{Pattern}}` invocation with one parameter per section.
#[must_use]
pub fn pattern_invocation(sections: &[Section]) -> String {
    let mut text = String::from("{{Pattern");
    for section in sections {
        text.push_str("\n|");
        text.push_str(&section.name);
        text.push_str("=\n");
        if section.render_ul {
            text.push_str(&ul_list(&section.text));
        } else {
            text.push_str(&section.text);
        }
    }
    text.push_str("\n}}");
    text
}

impl From<&Category> for Page {
    fn from(category: &Category) -> Self {
        Self::new(category.name.clone(), category_text(category))
    }
}

impl From<&Property> for Page {
    fn from(property: &Property) -> Self {
        Self::new(property.name.clone(), property_text(property))
    }
}

impl From<&Pattern> for Page {
    fn from(pattern: &Pattern) -> Self {
        Self::new(pattern.name.clone(), pattern_invocation(&pattern.sections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(name: &str, text: &str, render_ul: bool) -> Section {
        Section {
            name: name.to_string(),
            text: text.to_string(),
            render_ul,
        }
    }

    #[test]
    fn test_category_page() {
        let page = Page::from(&Category::new("Cloud Offerings", "Cloud Computing Patterns", "Offerings."));
        assert_eq!(page.title, "Category:Cloud Offerings");
        assert_eq!(page.text, "Offerings.[[Category:Cloud Computing Patterns]]");
    }

    #[test]
    fn test_root_category_page_has_no_marker() {
        let page = Page::from(&Category::new("Root", "", "The root."));
        assert_eq!(page.text, "The root.");
    }

    #[test]
    fn test_property_page() {
        let page = Page::from(&Property::new("HasAuthor", "Page", "Author of a pattern"));
        assert_eq!(page.title, "Property:HasAuthor");
        assert_eq!(page.text, "Author of a pattern[[Has type::Page| ]]");
    }

    #[test]
    fn test_pattern_page() {
        let pattern = Pattern {
            name: "Watchdog".to_string(),
            category: "Root".to_string(),
            sections: vec![
                section("intent", "Keep it alive.", false),
                section("known-uses", "[[A]] [[B]]", true),
                section("question", "", false),
            ],
        };

        let page = Page::from(&pattern);
        assert_eq!(page.title, "Watchdog");
        assert_eq!(
            page.text,
            "{{Pattern\n|intent=\nKeep it alive.\n|known-uses=\n* [[A]]\n* [[B]]\n|question=\n\n}}"
        );
    }

    #[test]
    fn test_empty_invocation() {
        assert_eq!(pattern_invocation(&[]), "{{Pattern\n}}");
    }
}
