//! Conversion service that ties all components together.

use std::fs;
use std::path::PathBuf;

use crate::config::{ConverterOptions, SectionVocabulary};
use crate::error::Result;
use crate::layout::{select_layout, Layout};
use crate::parser::parse_repository;
use crate::tree::{TreeBuilder, TreeDepth};
use crate::types::Repository;
use crate::wiki::{
    common_js_page, mainpage_page, mediawiki_mainpage, render_export, save_atomic, sidebar_page,
    template_page, Page,
};

/// The rendered output of one repository.
#[derive(Debug, Clone)]
pub struct WikiSite {
    /// Export document for `Special:Import`.
    pub export: String,

    /// Text to paste into `MediaWiki:Common.js`.
    pub common_js: String,

    /// Text to paste into `MediaWiki:Mainpage`.
    pub mainpage: String,

    /// Layout used by the pattern template.
    pub layout: Layout,

    /// Depth of the navigation tree, `None` if it could not be built.
    pub depth: Option<TreeDepth>,
}

/// Counts and paths reported after a conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub categories: usize,
    pub properties: usize,
    pub patterns: usize,
    pub layout: Layout,
    pub depth: Option<TreeDepth>,
    pub written: Vec<PathBuf>,
}

/// Render all wiki output for a parsed repository.
///
/// # Arguments
/// * `repository` - Parsed entities
/// * `vocabulary` - Section vocabulary the repository was parsed with
/// * `common_js_addon` - Script text appended verbatim to the Common.js fragment
#[must_use]
pub fn build_site(
    repository: &Repository,
    vocabulary: &SectionVocabulary,
    common_js_addon: &str,
) -> WikiSite {
    let selection = select_layout(vocabulary);
    let tree = TreeBuilder::from_repository(repository);

    // Category, property and pattern pages first, then the shared pages.
    let mut pages: Vec<Page> = repository.categories.iter().map(Page::from).collect();
    pages.extend(repository.properties.iter().map(Page::from));
    pages.extend(repository.patterns.iter().map(Page::from));
    pages.push(template_page(vocabulary, &selection, &repository.properties));
    pages.push(sidebar_page(&tree));
    pages.push(mainpage_page(repository, &tree));

    let site_name = repository
        .root()
        .map(|root| root.name_without_prefix())
        .unwrap_or_default();

    tracing::info!(
        pages = pages.len(),
        layout = %selection.layout,
        depth = tree.depth().map(TreeDepth::as_usize),
        "Rendered wiki pages"
    );

    WikiSite {
        export: render_export(site_name, &pages),
        common_js: common_js_page(&repository.properties, common_js_addon).text,
        mainpage: mediawiki_mainpage(repository.root()).text,
        layout: selection.layout,
        depth: tree.depth(),
    }
}

/// Convert a repository file into the three output files.
///
/// Reads the vocabulary, the input document and the Common.js add-on, then
/// writes the export document, the Common.js fragment and the mainpage
/// fragment, each atomically.
pub fn convert(options: &ConverterOptions) -> Result<ConversionSummary> {
    let vocabulary = options.load_vocabulary()?;
    tracing::info!(sections = vocabulary.len(), "Loaded section vocabulary");

    let xml = fs::read_to_string(&options.input_file)?;
    let repository = parse_repository(&xml, &vocabulary)?;
    let addon = fs::read_to_string(&options.common_js_addon_file)?;

    let site = build_site(&repository, &vocabulary, &addon);

    save_atomic(&options.output_file, &site.export)?;
    save_atomic(&options.common_js_file, &site.common_js)?;
    save_atomic(&options.mainpage_file, &site.mainpage)?;

    Ok(ConversionSummary {
        categories: repository.categories.len(),
        properties: repository.properties.len(),
        patterns: repository.patterns.len(),
        layout: site.layout,
        depth: site.depth,
        written: vec![
            options.output_file.clone(),
            options.common_js_file.clone(),
            options.mainpage_file.clone(),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConverterError;
    use tempfile::TempDir;

    const REPOSITORY: &str = r#"<patternrepository>
  <categories>
    <category><name>Root</name><description>All patterns.</description></category>
    <category><name>Networking</name><parent>Root</parent></category>
  </categories>
  <properties>
    <property><name>HasRelatedPattern</name><type>Page</type></property>
  </properties>
  <patterns>
    <pattern>
      <name>Retry</name>
      <category>Networking</category>
      <intent>Survive failures</intent>
      <icon>retry.png</icon>
    </pattern>
  </patterns>
</patternrepository>"#;

    fn vocabulary() -> SectionVocabulary {
        SectionVocabulary::from_lists("intent\nicon\nquestion\nshort-solution\ncategory", "").unwrap()
    }

    #[test]
    fn test_build_site_example_scenario() {
        let vocabulary = vocabulary();
        let repository = parse_repository(REPOSITORY, &vocabulary).unwrap();

        let site = build_site(&repository, &vocabulary, "");
        assert_eq!(site.layout, Layout::Classic);
        assert_eq!(site.depth, Some(TreeDepth::Two));
        assert_eq!(site.mainpage, "Root");
        assert!(site.common_js.contains("hasRelatedPatternData"));
    }

    #[test]
    fn test_build_site_page_order() {
        let vocabulary = vocabulary();
        let repository = parse_repository(REPOSITORY, &vocabulary).unwrap();
        let site = build_site(&repository, &vocabulary, "");

        let titles: Vec<&str> = site
            .export
            .match_indices("<title>")
            .map(|(start, _)| {
                let rest = &site.export[start + "<title>".len()..];
                &rest[..rest.find("</title>").unwrap()]
            })
            .collect();
        assert_eq!(
            titles,
            vec![
                "Category:Root",
                "Category:Networking",
                "Property:HasRelatedPattern",
                "Retry",
                "Template:Pattern",
                "Bootstrap:Sidebar",
                "Root",
            ]
        );
        assert!(site.export.contains("<sitename>Root</sitename>"));
    }

    #[test]
    fn test_convert_writes_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("in.xml"), REPOSITORY).unwrap();
        fs::write(dir.join("sections.txt"), "intent\r\nicon\r\n\r\nquestion\r\n").unwrap();
        fs::write(dir.join("ul.txt"), "").unwrap();
        fs::write(dir.join("addon.js"), "// addon").unwrap();

        let options = ConverterOptions::new(
            dir.join("in.xml"),
            dir.join("out/wiki.xml"),
            dir.join("out/common.js"),
            dir.join("out/mainpage.txt"),
        )
        .with_sections_files(dir.join("sections.txt"), dir.join("ul.txt"))
        .with_common_js_addon_file(dir.join("addon.js"));

        let summary = convert(&options).unwrap();
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.properties, 1);
        assert_eq!(summary.patterns, 1);
        assert_eq!(summary.written.len(), 3);

        assert_eq!(fs::read_to_string(dir.join("out/mainpage.txt")).unwrap(), "Root");
        assert!(fs::read_to_string(dir.join("out/common.js"))
            .unwrap()
            .ends_with("// addon"));
        assert!(fs::read_to_string(dir.join("out/wiki.xml"))
            .unwrap()
            .ends_with("</mediawiki>"));
    }

    #[test]
    fn test_convert_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("sections.txt"), "intent").unwrap();
        fs::write(dir.join("ul.txt"), "").unwrap();

        let options = ConverterOptions::new(
            dir.join("missing.xml"),
            dir.join("wiki.xml"),
            dir.join("common.js"),
            dir.join("mainpage.txt"),
        )
        .with_sections_files(dir.join("sections.txt"), dir.join("ul.txt"));

        let err = convert(&options).unwrap_err();
        assert!(matches!(err, ConverterError::Io(_)));
        assert!(!dir.join("wiki.xml").exists());
    }
}
