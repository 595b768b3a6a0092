//! Error types for the converter.
//!
//! Fatal problems abort the run through `ConverterError`. A tree that
//! cannot be generated is also a `ConverterError`, but the navigation
//! renderers treat it as a warning and degrade to empty output.

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// A structurally required XML field is absent or blank.
    #[error("Missing required field <{field}> in {context}")]
    MissingField { field: String, context: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML vocabulary file could not be read.
    #[error("Invalid section vocabulary: {0}")]
    VocabularyYaml(#[from] serde_yaml_ng::Error),

    /// Section vocabulary is unusable.
    #[error("Invalid section vocabulary: {0}")]
    Vocabulary(String),

    /// Level one of the category tree is empty.
    #[error("Tree cannot be generated: no category or pattern is a child of root '{root}'")]
    TreeBuild { root: String },
}

impl ConverterError {
    /// Shorthand for a [`ConverterError::MissingField`].
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
