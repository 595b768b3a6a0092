//! Layout selection for the pattern template.
//!
//! The template layout depends only on which section names the vocabulary
//! offers, not on any pattern's content. Four structural layouts exist,
//! tried in a fixed order; the first whose rule matches wins.

use std::fmt;

use crate::config::sections::{CATEGORY, ICON, INTENT, QUESTION, SHORT_SOLUTION};
use crate::config::SectionVocabulary;

/// Structural layout of the pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Intent banner above an icon and question row, references beside.
    Classic,

    /// Icon and short solution row, references beside.
    Compact,

    /// Icon next to the intent, references beside.
    ClassicWithoutQuestion,

    /// Icon and question row, references beside.
    ClassicWithoutIntent,

    /// No structural block; every section goes to the catch-all.
    Unstructured,
}

impl Layout {
    /// Section names rendered by this layout's own block.
    #[must_use]
    pub fn consumed(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &[INTENT, QUESTION, ICON],
            Self::Compact => &[ICON, SHORT_SOLUTION],
            Self::ClassicWithoutQuestion => &[ICON, INTENT],
            Self::ClassicWithoutIntent => &[QUESTION, ICON],
            Self::Unstructured => &[],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Compact => "compact",
            Self::ClassicWithoutQuestion => "classic-without-question",
            Self::ClassicWithoutIntent => "classic-without-intent",
            Self::Unstructured => "unstructured",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the layout decision table.
#[derive(Debug)]
struct LayoutRule {
    required: &'static [&'static str],
    forbidden: &'static [&'static str],
    layout: Layout,
}

impl LayoutRule {
    fn matches(&self, vocabulary: &SectionVocabulary) -> bool {
        self.required.iter().all(|name| vocabulary.contains(name))
            && !self.forbidden.iter().any(|name| vocabulary.contains(name))
    }
}

/// Layout rules in priority order.
const LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule {
        required: &[INTENT, ICON, QUESTION],
        forbidden: &[],
        layout: Layout::Classic,
    },
    LayoutRule {
        required: &[ICON, SHORT_SOLUTION],
        forbidden: &[],
        layout: Layout::Compact,
    },
    LayoutRule {
        required: &[INTENT, ICON],
        forbidden: &[QUESTION],
        layout: Layout::ClassicWithoutQuestion,
    },
    LayoutRule {
        required: &[ICON, QUESTION],
        forbidden: &[INTENT],
        layout: Layout::ClassicWithoutIntent,
    },
];

/// The chosen layout and the section names its block renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSelection {
    pub layout: Layout,
    pub consumed: Vec<&'static str>,
}

impl LayoutSelection {
    /// Whether a section is rendered by the layout block.
    #[must_use]
    pub fn is_consumed(&self, name: &str) -> bool {
        self.consumed.iter().any(|consumed| *consumed == name)
    }
}

/// Choose the template layout for a section vocabulary.
///
/// # Examples
/// ```
/// use patternpedia_converter::config::SectionVocabulary;
/// use patternpedia_converter::layout::{select_layout, Layout};
///
/// let vocabulary = SectionVocabulary::from_lists("icon\nshort-solution\n", "").unwrap();
/// assert_eq!(select_layout(&vocabulary).layout, Layout::Compact);
/// ```
#[must_use]
pub fn select_layout(vocabulary: &SectionVocabulary) -> LayoutSelection {
    let layout = LAYOUT_RULES
        .iter()
        .find(|rule| rule.matches(vocabulary))
        .map_or(Layout::Unstructured, |rule| rule.layout);

    tracing::debug!(%layout, "Selected template layout");

    LayoutSelection {
        layout,
        consumed: layout.consumed().to_vec(),
    }
}

/// Where a section ends up in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Rendered by the layout block.
    Layout,

    /// Image-only block for an icon the layout does not show.
    IconBlock,

    /// Generic catch-all panel.
    Panel,

    /// The trailing category marker.
    CategoryMarker,
}

/// Placement of one vocabulary section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlacement {
    pub name: String,
    pub placement: Placement,
}

/// Place every vocabulary section exactly once, in vocabulary order.
#[must_use]
pub fn plan_sections(
    vocabulary: &SectionVocabulary,
    selection: &LayoutSelection,
) -> Vec<SectionPlacement> {
    vocabulary
        .names()
        .map(|name| {
            let placement = if selection.is_consumed(name) {
                Placement::Layout
            } else if name == CATEGORY {
                Placement::CategoryMarker
            } else if name == ICON {
                Placement::IconBlock
            } else {
                Placement::Panel
            };
            SectionPlacement {
                name: name.to_string(),
                placement,
            }
        })
        .collect()
}
