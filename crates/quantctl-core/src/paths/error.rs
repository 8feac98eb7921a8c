//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! implementation details or adapter-specific concerns.

use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// An empty path or file name was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A file name was expected but a path with separators was given.
    #[error("{0:?} must be a plain file name, not a path")]
    NotAFileName(String),
}
