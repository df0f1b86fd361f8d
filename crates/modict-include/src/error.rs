//! Error types for the traversal crate.

use std::path::PathBuf;

/// Errors that can occur while walking a directory and loading documents.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    /// The root directory does not exist and the traversal is not optional.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A filter pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory iteration failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A document's content could not be parsed.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Convenience alias for traversal results.
pub type IncludeResult<T> = Result<T, IncludeError>;
