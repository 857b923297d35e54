//! Path-related error types.
//!
//! Provides semantic errors for configuration and path resolution without
//! exposing adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving configured paths.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// A configured value was present but unusable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
