//! CLI-specific error types and mappings.
//!
//! This module maps core, runtime and launcher errors to exit codes and
//! user-facing messages.

use thiserror::Error;
use venvdbg_core::{LaunchError, PathError, ResolveError};
use venvdbg_runtime::ActivationError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The invocation itself is wrong (selectors, pattern syntax).
    #[error("{0}")]
    Usage(String),

    /// Nothing matched the pattern.
    #[error("{0}")]
    NoMatch(String),

    /// No environments to search.
    #[error("{0}")]
    NoInput(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration or runtime activation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The launcher could not be started.
    #[error("Process error: {0}")]
    Process(String),

    /// The launched tool exited unsuccessfully.
    #[error("inspection command exited with status {0}")]
    ChildExit(i32),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoMatch(_) => 1,
            Self::Usage(_) => 2,
            Self::NoInput(_) => 66, // EX_NOINPUT
            Self::Process(_) => 71, // EX_OSERR
            Self::Io(_) => 74,      // EX_IOERR
            Self::Config(_) => 78,  // EX_CONFIG
            Self::ChildExit(code) => *code,
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        let message = err.to_string();
        match err {
            ResolveError::MissingSelector
            | ResolveError::ConflictingSelectors
            | ResolveError::InvalidPattern { .. } => Self::Usage(message),
            ResolveError::NoEnvironmentsFound { .. } => Self::NoInput(message),
            ResolveError::NoMatchFound { .. } => Self::NoMatch(message),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ActivationError> for CliError {
    fn from(err: ActivationError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::EmptyCommand => Self::Config(err.to_string()),
            LaunchError::Spawn { .. } | LaunchError::Wait { .. } => Self::Process(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Pick the process exit code for an error bubbling out of `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
