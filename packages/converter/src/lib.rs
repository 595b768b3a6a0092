//! PatternPedia Converter - Turn a pattern repository into a MediaWiki import.
//!
//! This crate reads a pattern repository XML document (categories, semantic
//! properties and patterns) and renders it as a MediaWiki export document,
//! together with the `MediaWiki:Common.js` and `MediaWiki:Mainpage`
//! fragments that have to be pasted in by hand.
//!
//! # Example
//!
//! ```
//! use patternpedia_converter::config::SectionVocabulary;
//! use patternpedia_converter::{build_site, parse_repository};
//!
//! let xml = r#"<patternrepository>
//!   <categories><category><name>Root</name></category></categories>
//!   <patterns><pattern><name>Retry</name><category>Root</category><intent>Try again.</intent></pattern></patterns>
//! </patternrepository>"#;
//!
//! let vocabulary = SectionVocabulary::from_lists("intent\nicon", "").unwrap();
//! let repository = parse_repository(xml, &vocabulary).unwrap();
//! let site = build_site(&repository, &vocabulary, "");
//!
//! assert_eq!(site.mainpage, "Root");
//! assert!(site.export.contains("<title>Retry</title>"));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Configuration constants, section vocabulary and run options
//! - [`types`]: Core data types (Category, Property, Pattern, etc.)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`registry`]: Extensible handlers for inline section markup
//! - [`parser`]: Repository parsing and section extraction
//! - [`tree`]: Category tree derivation
//! - [`layout`]: Template layout selection
//! - [`wiki`]: Wiki page rendering and the export document
//! - [`cli`]: Command-line interface
//! - [`converter`]: Main conversion service

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod layout;
pub mod parser;
pub mod registry;
pub mod tree;
pub mod types;
pub mod wiki;
pub mod xml;

// Re-export main functions
pub use converter::{build_site, convert, ConversionSummary, WikiSite};
pub use parser::parse_repository;

// Re-export commonly used items
pub use config::{ConverterOptions, SectionVocabulary};
pub use error::{ConverterError, Result};
pub use layout::{select_layout, Layout};
pub use tree::{TreeBuilder, TreeDepth};
pub use types::{Category, Pattern, Property, Repository, Section};
