//! Error types for Horizon CardDeck.

use std::fmt;

use crate::content::ContentType;

/// The main error type for content resolution and configuration.
///
/// Data-refresh failures are deliberately not represented here: a provider
/// error is recoverable and surfaces through the content instance's `error`
/// signal instead of a `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The requested content type tag is not part of the supported set.
    UnsupportedType(String),
    /// The optional feature library required by this content type could not
    /// be loaded.
    FeatureUnavailable {
        /// The content type whose feature library is missing.
        content_type: ContentType,
    },
    /// The configuration was rejected while constructing or configuring a
    /// content instance.
    Configuration(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(tag) => {
                write!(f, "{} content type is not supported", tag.to_uppercase())
            }
            Self::FeatureUnavailable { content_type } => {
                write!(
                    f,
                    "{content_type} content type is not available with this distribution"
                )
            }
            Self::Configuration(msg) => {
                write!(f, "invalid content configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for ContentError {}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// A specialized Result type for content operations.
pub type ContentResult<T> = std::result::Result<T, ContentError>;
