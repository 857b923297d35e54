//! Platform-specific defaults and path normalization.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Default root for test-created environments: the system temp directory.
pub fn default_venv_root() -> PathBuf {
    env::temp_dir()
}

/// Default inspection command when nothing is configured.
///
/// Uses the user's `$SHELL`, falling back to the platform shell.
pub fn default_launcher() -> String {
    match env::var("SHELL") {
        Ok(shell) if !shell.trim().is_empty() => shell,
        _ => platform_shell().to_string(),
    }
}

#[cfg(windows)]
const fn platform_shell() -> &'static str {
    "cmd.exe"
}

#[cfg(not(windows))]
const fn platform_shell() -> &'static str {
    "/bin/sh"
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
