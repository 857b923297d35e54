//! Setting resolution: explicit value, then environment variable, then default.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{default_launcher, default_venv_root, normalize_user_path};
use crate::index::DEFAULT_MARKER_NAME;

/// Environment variable naming the virtual-environment root.
pub const VENV_ROOT_ENV: &str = "VENVDBG_ROOT";
/// Environment variable naming the marker file.
pub const MARKER_NAME_ENV: &str = "VENVDBG_MARKER";
/// Environment variable naming the runtime to activate before launching.
pub const RUNTIME_DIR_ENV: &str = "VENVDBG_RUNTIME_DIR";
/// Environment variable holding the inspection command line.
pub const LAUNCHER_ENV: &str = "VENVDBG_LAUNCHER";

/// How a setting was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The user passed an explicit value (e.g., CLI flag).
    Explicit,
    /// The value came from environment variables / `.env`.
    EnvVar,
    /// Built-in fallback.
    Default,
}

/// A resolved setting and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> Resolved<T> {
    const fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Read an environment variable, treating blank values as unset.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the virtual-environment root.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `VENVDBG_ROOT` environment variable
/// 3. System temp directory
pub fn resolve_venv_root(explicit: Option<&str>) -> Result<Resolved<PathBuf>, PathError> {
    if let Some(path) = explicit {
        return Ok(Resolved::new(
            normalize_user_path(path)?,
            ConfigSource::Explicit,
        ));
    }

    if let Some(path) = env_value(VENV_ROOT_ENV) {
        return Ok(Resolved::new(
            normalize_user_path(&path)?,
            ConfigSource::EnvVar,
        ));
    }

    Ok(Resolved::new(default_venv_root(), ConfigSource::Default))
}

/// Resolve the marker file name.
///
/// The name must be a single path component.
pub fn resolve_marker_name(explicit: Option<&str>) -> Result<Resolved<String>, PathError> {
    let (name, source) = match explicit {
        Some(name) => (name.trim().to_string(), ConfigSource::Explicit),
        None => match env_value(MARKER_NAME_ENV) {
            Some(name) => (name.trim().to_string(), ConfigSource::EnvVar),
            None => (DEFAULT_MARKER_NAME.to_string(), ConfigSource::Default),
        },
    };

    let key = match source {
        ConfigSource::Explicit => "--marker",
        ConfigSource::EnvVar | ConfigSource::Default => MARKER_NAME_ENV,
    };
    if name.is_empty() {
        return Err(PathError::InvalidValue {
            key,
            reason: "marker name cannot be empty".to_string(),
        });
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PathError::InvalidValue {
            key,
            reason: format!("'{name}' must be a plain file name"),
        });
    }

    Ok(Resolved::new(name, source))
}

/// Resolve the runtime directory to activate, if any.
///
/// `None` means the runtime is assumed to be active already.
pub fn resolve_runtime_dir(
    explicit: Option<&str>,
) -> Result<Option<Resolved<PathBuf>>, PathError> {
    if let Some(path) = explicit {
        return Ok(Some(Resolved::new(
            normalize_user_path(path)?,
            ConfigSource::Explicit,
        )));
    }

    env_value(RUNTIME_DIR_ENV)
        .map(|path| {
            normalize_user_path(&path).map(|p| Resolved::new(p, ConfigSource::EnvVar))
        })
        .transpose()
}

/// Resolve the inspection command line.
///
/// Resolution order: explicit, `VENVDBG_LAUNCHER`, `$SHELL`, platform shell.
pub fn resolve_launcher(explicit: Option<&str>) -> Resolved<String> {
    if let Some(cmd) = explicit.filter(|c| !c.trim().is_empty()) {
        return Resolved::new(cmd.to_string(), ConfigSource::Explicit);
    }

    if let Some(cmd) = env_value(LAUNCHER_ENV) {
        return Resolved::new(cmd, ConfigSource::EnvVar);
    }

    Resolved::new(default_launcher(), ConfigSource::Default)
}
