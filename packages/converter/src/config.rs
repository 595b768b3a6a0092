//! Configuration constants and the section vocabulary for the converter.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConverterError, Result};
use crate::types::Section;

/// Name of the root element of a pattern repository document.
pub const REPOSITORY_ELEMENT: &str = "patternrepository";

/// Page name prefix for categories.
pub const CATEGORY_PREFIX: &str = "Category:";

/// Page name prefix for properties.
pub const PROPERTY_PREFIX: &str = "Property:";

/// Default file listing the recognized section names, one per line.
pub const DEFAULT_SECTIONS_FILE: &str = "sections.txt";

/// Default file listing the sections rendered as bullet lists.
pub const DEFAULT_BULLET_SECTIONS_FILE: &str = "ul_rendered_sections.txt";

/// Default file appended verbatim to the Common.js fragment.
pub const DEFAULT_COMMON_JS_ADDON_FILE: &str = "common_js_addon.txt";

/// Width of images embedded in section content.
pub const CONTENT_IMAGE_WIDTH: &str = "850px";

/// Width of the pattern icon inside the pattern template.
pub const TEMPLATE_ICON_WIDTH: &str = "118px";

/// Width of the pattern icons on the mainpage.
pub const MAINPAGE_ICON_WIDTH: &str = "100px";

/// Number of pattern cells in one mainpage table row.
pub const MAINPAGE_CELLS_PER_ROW: usize = 6;

/// Deepest tree level reachable from the root category.
pub const MAX_TREE_DEPTH: usize = 3;

/// Title of the shared pattern template page.
pub const TEMPLATE_PAGE_TITLE: &str = "Template:Pattern";

/// Title of the sidebar navigation page.
pub const SIDEBAR_PAGE_TITLE: &str = "Bootstrap:Sidebar";

/// Title of the page whose content selects the wiki mainpage.
pub const MEDIAWIKI_MAINPAGE_TITLE: &str = "MediaWiki:Mainpage";

/// Title of the page holding site-wide JavaScript.
pub const COMMON_JS_PAGE_TITLE: &str = "MediaWiki:Common.js";

/// Generator name written into the export header.
pub const EXPORT_GENERATOR: &str = "PCT";

/// Section names the layout selector and renderers treat specially.
pub mod sections {
    pub const INTENT: &str = "intent";
    pub const ICON: &str = "icon";
    pub const QUESTION: &str = "question";
    pub const SHORT_SOLUTION: &str = "short-solution";
    pub const CATEGORY: &str = "category";
}

/// A configured section name and how its content is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    /// Section name, as used in `{{{name}}}` template parameters.
    pub name: String,

    /// Whether `[[`-delimited fragments are rendered as a bullet list.
    pub render_ul: bool,
}

/// The ordered set of recognized section names.
///
/// Loaded once per run and passed explicitly to the parser and the
/// layout selector. Every pattern carries exactly these sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVocabulary {
    sections: Vec<SectionSpec>,
}

/// On-disk shape of a YAML vocabulary file.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    sections: Vec<String>,
    #[serde(default)]
    bullet_sections: Vec<String>,
}

impl SectionVocabulary {
    /// Build a vocabulary from section names and the bullet-rendered subset.
    ///
    /// Names are trimmed, blank names are dropped and repeated names keep
    /// their first position.
    ///
    /// # Examples
    /// ```
    /// use patternpedia_converter::config::SectionVocabulary;
    ///
    /// let vocabulary = SectionVocabulary::new(["intent", "icon", "known-uses"], ["known-uses"]).unwrap();
    /// assert_eq!(vocabulary.len(), 3);
    /// assert!(vocabulary.contains("icon"));
    /// assert!(vocabulary.get("known-uses").unwrap().render_ul);
    /// ```
    pub fn new<I, J, S, T>(names: I, bullet_names: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let bullets: HashSet<String> = bullet_names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let mut sections = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if !seen.insert(name.to_string()) {
                tracing::debug!(section = name, "Ignoring repeated section name");
                continue;
            }
            sections.push(SectionSpec {
                name: name.to_string(),
                render_ul: bullets.contains(name),
            });
        }

        if sections.is_empty() {
            return Err(ConverterError::Vocabulary(
                "no section names configured".to_string(),
            ));
        }

        Ok(Self { sections })
    }

    /// Build a vocabulary from two line-delimited lists.
    ///
    /// Accepts both `\n` and `\r\n` line endings.
    pub fn from_lists(sections: &str, bullet_sections: &str) -> Result<Self> {
        Self::new(sections.lines(), bullet_sections.lines())
    }

    /// Build a vocabulary from a YAML document with `sections` and
    /// `bullet_sections` lists.
    ///
    /// # Examples
    /// ```
    /// use patternpedia_converter::config::SectionVocabulary;
    ///
    /// let yaml = "sections: [intent, icon]\nbullet_sections: [icon]\n";
    /// let vocabulary = SectionVocabulary::from_yaml_str(yaml).unwrap();
    /// assert_eq!(vocabulary.names().collect::<Vec<_>>(), vec!["intent", "icon"]);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: VocabularyFile = serde_yaml_ng::from_str(yaml)?;
        Self::new(file.sections, file.bullet_sections)
    }

    /// Load a vocabulary from the two line-delimited list files.
    pub fn load(sections_path: &Path, bullet_sections_path: &Path) -> Result<Self> {
        let sections = fs::read_to_string(sections_path)?;
        let bullet_sections = fs::read_to_string(bullet_sections_path)?;
        Self::from_lists(&sections, &bullet_sections)
    }

    /// Load a vocabulary from a YAML file.
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Whether the vocabulary contains a section name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sections.iter().any(|spec| spec.name == name)
    }

    /// Look up a section by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|spec| spec.name == name)
    }

    /// Section names in configured order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|spec| spec.name.as_str())
    }

    /// Section specifications in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionSpec> {
        self.sections.iter()
    }

    /// Number of configured sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the vocabulary is empty. Never true for a constructed vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Create a fresh, empty set of sections for one pattern.
    #[must_use]
    pub fn instantiate(&self) -> Vec<Section> {
        self.sections.iter().map(Section::from_spec).collect()
    }
}

impl<'a> IntoIterator for &'a SectionVocabulary {
    type Item = &'a SectionSpec;
    type IntoIter = std::slice::Iter<'a, SectionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// File locations for a single conversion run.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub common_js_file: PathBuf,
    pub mainpage_file: PathBuf,
    pub sections_file: PathBuf,
    pub bullet_sections_file: PathBuf,
    pub vocabulary_file: Option<PathBuf>,
    pub common_js_addon_file: PathBuf,
}

impl ConverterOptions {
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        common_js_file: impl Into<PathBuf>,
        mainpage_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            common_js_file: common_js_file.into(),
            mainpage_file: mainpage_file.into(),
            sections_file: DEFAULT_SECTIONS_FILE.into(),
            bullet_sections_file: DEFAULT_BULLET_SECTIONS_FILE.into(),
            vocabulary_file: None,
            common_js_addon_file: DEFAULT_COMMON_JS_ADDON_FILE.into(),
        }
    }

    pub fn with_sections_files(
        mut self,
        sections_file: impl Into<PathBuf>,
        bullet_sections_file: impl Into<PathBuf>,
    ) -> Self {
        self.sections_file = sections_file.into();
        self.bullet_sections_file = bullet_sections_file.into();
        self
    }

    pub fn with_vocabulary_file(mut self, vocabulary_file: impl Into<PathBuf>) -> Self {
        self.vocabulary_file = Some(vocabulary_file.into());
        self
    }

    pub fn with_common_js_addon_file(mut self, addon_file: impl Into<PathBuf>) -> Self {
        self.common_js_addon_file = addon_file.into();
        self
    }

    /// Load the section vocabulary these options point at.
    ///
    /// A YAML vocabulary file takes precedence over the two list files.
    pub fn load_vocabulary(&self) -> Result<SectionVocabulary> {
        match &self.vocabulary_file {
            Some(path) => SectionVocabulary::load_yaml(path),
            None => SectionVocabulary::load(&self.sections_file, &self.bullet_sections_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lists_handles_crlf() {
        let vocabulary =
            SectionVocabulary::from_lists("intent\r\nicon\r\nknown-uses\r\n", "known-uses\r\n")
                .unwrap();

        assert_eq!(
            vocabulary.names().collect::<Vec<_>>(),
            vec!["intent", "icon", "known-uses"]
        );
        assert!(!vocabulary.get("intent").unwrap().render_ul);
        assert!(vocabulary.get("known-uses").unwrap().render_ul);
    }

    #[test]
    fn test_from_lists_skips_blank_and_repeated_names() {
        let vocabulary = SectionVocabulary::from_lists("intent\n\nicon\nintent\n", "").unwrap();
        assert_eq!(vocabulary.names().collect::<Vec<_>>(), vec!["intent", "icon"]);
    }

    #[test]
    fn test_bullet_name_outside_vocabulary_is_ignored() {
        let vocabulary = SectionVocabulary::from_lists("intent", "examples").unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert!(!vocabulary.contains("examples"));
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let result = SectionVocabulary::from_lists("\n\n", "");
        assert!(matches!(result, Err(ConverterError::Vocabulary(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = "sections:\n  - intent\n  - icon\n  - known-uses\nbullet_sections:\n  - known-uses\n";
        let vocabulary = SectionVocabulary::from_yaml_str(yaml).unwrap();

        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.get("known-uses").unwrap().render_ul);
    }

    #[test]
    fn test_from_yaml_str_without_bullets() {
        let vocabulary = SectionVocabulary::from_yaml_str("sections: [intent]").unwrap();
        assert!(!vocabulary.get("intent").unwrap().render_ul);
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let result = SectionVocabulary::from_yaml_str("bullet_sections: [icon]");
        assert!(matches!(result, Err(ConverterError::VocabularyYaml(_))));
    }

    #[test]
    fn test_instantiate_creates_empty_sections() {
        let vocabulary = SectionVocabulary::from_lists("intent\nknown-uses", "known-uses").unwrap();
        let sections = vocabulary.instantiate();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "intent");
        assert!(sections[0].text.is_empty());
        assert!(sections[1].render_ul);
    }

    #[test]
    fn test_options_defaults() {
        let options = ConverterOptions::new("in.xml", "out.xml", "common.js", "mainpage.txt");

        assert_eq!(options.sections_file, PathBuf::from(DEFAULT_SECTIONS_FILE));
        assert_eq!(
            options.bullet_sections_file,
            PathBuf::from(DEFAULT_BULLET_SECTIONS_FILE)
        );
        assert_eq!(
            options.common_js_addon_file,
            PathBuf::from(DEFAULT_COMMON_JS_ADDON_FILE)
        );
        assert!(options.vocabulary_file.is_none());
    }

    #[test]
    fn test_options_builders() {
        let options = ConverterOptions::new("in.xml", "out.xml", "common.js", "mainpage.txt")
            .with_sections_files("a.txt", "b.txt")
            .with_vocabulary_file("vocabulary.yaml")
            .with_common_js_addon_file("addon.js");

        assert_eq!(options.sections_file, PathBuf::from("a.txt"));
        assert_eq!(options.bullet_sections_file, PathBuf::from("b.txt"));
        assert_eq!(options.vocabulary_file, Some(PathBuf::from("vocabulary.yaml")));
        assert_eq!(options.common_js_addon_file, PathBuf::from("addon.js"));
    }
}
