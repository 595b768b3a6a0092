//! String helpers for wiki markup.

use std::borrow::Cow;

/// Turn a hyphenated section key into a heading.
///
/// Hyphens become spaces and every word is capitalized, with the rest of
/// the word lowercased.
///
/// # Examples
/// ```
/// use patternpedia_converter::wiki::prettify;
///
/// assert_eq!(prettify("known-uses"), "Known Uses");
/// assert_eq!(prettify("has-related-pattern"), "Has Related Pattern");
/// ```
pub fn prettify(text: &str) -> String {
    text.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a camel-case name before every ASCII uppercase letter and join the
/// lowercased parts with hyphens.
///
/// # Examples
/// ```
/// use patternpedia_converter::wiki::camel_case_to_minus_split;
///
/// assert_eq!(camel_case_to_minus_split("HasRelatedPattern"), "has-related-pattern");
/// assert_eq!(camel_case_to_minus_split("author"), "author");
/// ```
pub fn camel_case_to_minus_split(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    for (index, c) in text.chars().enumerate() {
        if index == 0 {
            result.extend(c.to_lowercase());
        } else if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Lowercase the first character, leaving the rest untouched.
pub fn uncapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render each `[[`-delimited fragment of a section as a bullet.
///
/// # Examples
/// ```
/// use patternpedia_converter::wiki::ul_list;
///
/// assert_eq!(ul_list(" [[A]] [[B|b]] "), "* [[A]]\n* [[B|b]]");
/// ```
pub fn ul_list(text: &str) -> String {
    text.trim()
        .split("[[")
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("* [[{}", fragment.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape `& < > " '` for embedding page text in the export document.
pub fn escape_page_text(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}
