//! Inspection launcher port.
//!
//! The core hands a resolved identifier to whatever starts the interactive
//! session. It knows nothing about how that session works.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ResolutionResult;

/// What the launcher needs to enter an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Resolved environment identifier.
    pub identifier: String,
    /// Virtual-environment root the identifier was resolved under.
    pub environment_root: PathBuf,
    /// Extra environment variables for the launched tool.
    pub env: Vec<(String, String)>,
    /// Environment variables to remove for the launched tool.
    pub remove_env: Vec<String>,
}

impl LaunchRequest {
    pub fn new(identifier: impl Into<String>, environment_root: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            environment_root: environment_root.into(),
            env: Vec::new(),
            remove_env: Vec::new(),
        }
    }

    /// Build a request for a resolution result.
    pub fn for_resolution(result: &ResolutionResult, environment_root: impl Into<PathBuf>) -> Self {
        Self::new(result.identifier.clone(), environment_root)
    }

    /// Add environment variables for the launched tool.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Remove environment variables for the launched tool.
    #[must_use]
    pub fn without_env<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.remove_env.extend(keys.into_iter().map(Into::into));
        self
    }
}

/// How the inspection session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Exit code of the launched tool; `None` when killed by a signal.
    pub exit_code: Option<i32>,
}

impl LaunchOutcome {
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Errors from starting the inspection session.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The configured command line is empty.
    #[error("launcher command is empty")]
    EmptyCommand,

    /// The launcher process could not be started.
    #[error("failed to start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// Waiting on the launcher process failed.
    #[error("failed waiting for '{program}': {reason}")]
    Wait { program: String, reason: String },
}

/// Starts an interactive session inside a resolved environment.
#[async_trait]
pub trait InspectionLauncher: Send + Sync {
    /// Run the session to completion.
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError>;
}
