//! Types for the inline element registry.

use std::collections::HashSet;

use crate::types::Category;

/// Result from resolving an inline element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// The resolved wiki markup.
    pub text: String,
}

impl ParseResult {
    /// Create a new parse result with text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Counters collected while resolving section content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Typed links emitted.
    pub links: usize,
    /// Typed links whose target was rewritten to a category page.
    pub category_links: usize,
    /// Embedded images emitted.
    pub images: usize,
    /// Elements without a handler that were dropped.
    pub skipped: usize,
}

/// Context passed through content resolution.
#[derive(Debug)]
pub struct ResolveContext<'a> {
    /// Unprefixed names of all known categories.
    categories: &'a HashSet<String>,

    /// Running counters.
    pub stats: ResolveStats,
}

impl<'a> ResolveContext<'a> {
    /// Create a new resolve context over a set of unprefixed category names.
    #[must_use]
    pub fn new(categories: &'a HashSet<String>) -> Self {
        Self {
            categories,
            stats: ResolveStats::default(),
        }
    }

    /// Whether `target` is the unprefixed name of a known category.
    #[must_use]
    pub fn is_category(&self, target: &str) -> bool {
        self.categories.contains(target)
    }
}

/// Collect the unprefixed names of a category list.
#[must_use]
pub fn category_names(categories: &[Category]) -> HashSet<String> {
    categories
        .iter()
        .map(|category| category.name_without_prefix().to_string())
        .collect()
}
