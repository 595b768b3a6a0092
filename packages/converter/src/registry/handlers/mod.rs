//! Inline element handlers for pattern section content.

mod inline;

pub use inline::*;
