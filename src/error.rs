//! Error types for loading and looking up content

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading posts or resolving a slug
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid front-matter in {path:?}: {reason}")]
    MetadataParse { path: PathBuf, reason: String },

    #[error("Missing front-matter field `{field}` in {path:?}")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Invalid publishedAt date `{value}` in {path:?}")]
    DateParse { path: PathBuf, value: String },

    #[error("Duplicate slug `{slug}` in {path:?}")]
    DuplicateSlug { slug: String, path: PathBuf },

    #[error("No post found with slug `{0}`")]
    NotFound(String),

    #[error("IO error when reading {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Whether this error is a failed slug lookup rather than a load failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
