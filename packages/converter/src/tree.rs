//! Category tree derived from the flat parent relation.
//!
//! Categories point at their parent category by name and patterns point at
//! their owning category. Starting at the root category (the first one in
//! the repository), the builder collects up to three levels of children:
//!
//! ```text
//! Root (not part of the tree)
//! ├── level 1: categories/patterns whose parent is Root
//! │   ├── level 2: categories/patterns whose parent is the level 1 entry
//! │   │   └── level 3: categories/patterns whose parent is the level 2 entry
//! ```
//!
//! Anything deeper is not reachable. Each level is one explicit pass over
//! an arena of entries; children keep document order, categories first.

use std::cell::OnceCell;

use crate::config::MAX_TREE_DEPTH;
use crate::error::{ConverterError, Result};
use crate::types::{Category, Pattern, Repository};

/// Whether a tree entry is a category or a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Category,
    Pattern,
}

/// A named node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Unprefixed category name or pattern name.
    pub name: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    #[must_use]
    pub fn is_pattern(&self) -> bool {
        self.kind == EntryKind::Pattern
    }
}

/// A level 2 entry and its level 3 children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTwo {
    pub entry: TreeEntry,
    pub children: Vec<TreeEntry>,
}

/// A level 1 entry and its level 2 children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOne {
    pub entry: TreeEntry,
    pub children: Vec<LevelTwo>,
}

/// Deepest non-empty level of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TreeDepth {
    One,
    Two,
    Three,
}

impl TreeDepth {
    /// Numeric depth, 1 to 3.
    #[must_use]
    pub fn as_usize(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// The derived navigation tree below the root category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree {
    /// Unprefixed name of the root category.
    pub root: String,

    /// Level 1 entries with their descendants.
    pub levels: Vec<LevelOne>,

    /// Deepest level that has at least one entry.
    pub depth: TreeDepth,
}

impl CategoryTree {
    /// Entries at a given level (1 to 3), in tree order.
    #[must_use]
    pub fn entries_at(&self, level: usize) -> Vec<&TreeEntry> {
        match level {
            1 => self.levels.iter().map(|one| &one.entry).collect(),
            2 => self
                .levels
                .iter()
                .flat_map(|one| one.children.iter().map(|two| &two.entry))
                .collect(),
            3 => self
                .levels
                .iter()
                .flat_map(|one| one.children.iter())
                .flat_map(|two| two.children.iter())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One flat node of the parent relation.
#[derive(Debug)]
struct ArenaNode<'a> {
    name: &'a str,
    parent: &'a str,
    kind: EntryKind,
}

/// Flat parent relation over all categories (except the root) and patterns.
struct Arena<'a> {
    nodes: Vec<ArenaNode<'a>>,
}

impl<'a> Arena<'a> {
    fn new(categories: &'a [Category], patterns: &'a [Pattern]) -> Self {
        let categories = categories.iter().skip(1).map(|category| ArenaNode {
            name: category.name_without_prefix(),
            parent: &category.parent,
            kind: EntryKind::Category,
        });
        let patterns = patterns.iter().map(|pattern| ArenaNode {
            name: &pattern.name,
            parent: &pattern.category,
            kind: EntryKind::Pattern,
        });
        Self {
            nodes: categories.chain(patterns).collect(),
        }
    }

    fn children_of(&self, parent: &str) -> Vec<TreeEntry> {
        self.nodes
            .iter()
            .filter(|node| node.parent == parent)
            .map(|node| TreeEntry {
                name: node.name.to_string(),
                kind: node.kind,
            })
            .collect()
    }
}

/// Builds the category tree once and hands out the cached result.
pub struct TreeBuilder<'a> {
    categories: &'a [Category],
    patterns: &'a [Pattern],
    tree: OnceCell<Option<CategoryTree>>,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub fn new(categories: &'a [Category], patterns: &'a [Pattern]) -> Self {
        Self {
            categories,
            patterns,
            tree: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn from_repository(repository: &'a Repository) -> Self {
        Self::new(&repository.categories, &repository.patterns)
    }

    /// Unprefixed name of the root category, or an empty string.
    #[must_use]
    pub fn root_name(&self) -> &str {
        self.categories
            .first()
            .map(Category::name_without_prefix)
            .unwrap_or_default()
    }

    /// The tree, built on first use.
    ///
    /// # Errors
    /// Returns `TreeBuild` when there is no root or level 1 is empty.
    pub fn tree(&self) -> Result<&CategoryTree> {
        self.tree
            .get_or_init(|| self.build())
            .as_ref()
            .ok_or_else(|| ConverterError::TreeBuild {
                root: self.root_name().to_string(),
            })
    }

    /// Depth of the tree, or `None` when it cannot be generated.
    #[must_use]
    pub fn depth(&self) -> Option<TreeDepth> {
        self.tree().ok().map(|tree| tree.depth)
    }

    fn build(&self) -> Option<CategoryTree> {
        let root = self.categories.first()?.name_without_prefix();
        let arena = Arena::new(self.categories, self.patterns);

        let level_one = arena.children_of(root);
        if level_one.is_empty() {
            tracing::warn!(root, "Tree cannot be generated: root has no children");
            return None;
        }

        let mut depth = TreeDepth::One;
        let levels: Vec<LevelOne> = level_one
            .into_iter()
            .map(|entry| {
                let children: Vec<LevelTwo> = arena
                    .children_of(&entry.name)
                    .into_iter()
                    .map(|entry| {
                        let children = arena.children_of(&entry.name);
                        if !children.is_empty() {
                            depth = depth.max(TreeDepth::Three);
                        }
                        LevelTwo { entry, children }
                    })
                    .collect();
                if !children.is_empty() {
                    depth = depth.max(TreeDepth::Two);
                }
                LevelOne { entry, children }
            })
            .collect();

        debug_assert!(depth.as_usize() <= MAX_TREE_DEPTH);
        tracing::debug!(
            root,
            depth = depth.as_usize(),
            level_one = levels.len(),
            "Built category tree"
        );

        Some(CategoryTree {
            root: root.to_string(),
            levels,
            depth,
        })
    }
}
