use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-relnotes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot resolve tag '{0}' to a commit")]
    TagNotFound(String),

    #[error("Cannot find template file: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-relnotes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a resolution error for a tag that does not exist
    pub fn tag_not_found(tag: impl Into<String>) -> Self {
        ReleaseNotesError::TagNotFound(tag.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Template(msg.into())
    }
}
