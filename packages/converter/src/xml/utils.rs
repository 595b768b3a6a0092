//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use patternpedia_converter::xml::get_tag_name;
///
/// let xml = r#"<patternrepository><categories/></patternrepository>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "patternrepository");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use patternpedia_converter::xml::find_children;
///
/// let xml = r#"<categories><category/><other/><category/></categories>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(find_children(doc.root_element(), "category").count(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Concatenate all text below a node, in document order.
///
/// Unlike [`Node::text`], this includes the text of nested elements.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use patternpedia_converter::xml::deep_text;
///
/// let xml = r#"<description>Scale <b>out</b> elastically</description>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(deep_text(doc.root_element()), "Scale out elastically");
/// ```
pub fn deep_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Get the full text of the first child element with the given tag name.
///
/// # Returns
/// The untrimmed text, or `None` if there is no such child
pub fn field_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag).map(deep_text)
}

/// Collapse every run of whitespace into a single space and trim.
///
/// # Examples
/// ```
/// use patternpedia_converter::xml::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Cloud\n\t  Offerings  "), "Cloud Offerings");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
