//! All settings resolved in one call.
//!
//! Used by the CLI composition root and printed by `venvdbg paths`.

use std::path::PathBuf;

use super::error::PathError;
use super::settings::{
    ConfigSource, Resolved, resolve_launcher, resolve_marker_name, resolve_runtime_dir,
    resolve_venv_root,
};

/// Values passed explicitly by the caller; `None` falls through to env/defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub venv_root: Option<String>,
    pub marker_name: Option<String>,
    pub runtime_dir: Option<String>,
    pub launcher: Option<String>,
}

/// Every setting venvdbg uses, captured once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub venv_root: Resolved<PathBuf>,
    pub marker_name: Resolved<String>,
    pub runtime_dir: Option<Resolved<PathBuf>>,
    pub launcher: Resolved<String>,
}

impl ResolvedConfig {
    /// Resolve every setting using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with(&ConfigOverrides::default())
    }

    /// Resolve with explicit overrides taking priority.
    pub fn resolve_with(overrides: &ConfigOverrides) -> Result<Self, PathError> {
        Ok(Self {
            venv_root: resolve_venv_root(overrides.venv_root.as_deref())?,
            marker_name: resolve_marker_name(overrides.marker_name.as_deref())?,
            runtime_dir: resolve_runtime_dir(overrides.runtime_dir.as_deref())?,
            launcher: resolve_launcher(overrides.launcher.as_deref()),
        })
    }
}

impl std::fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "venv_root = {}", self.venv_root.value.display())?;
        writeln!(f, "venv_root_source = {}", self.venv_root.source.as_str())?;
        writeln!(f, "marker_name = {}", self.marker_name.value)?;
        writeln!(f, "marker_source = {}", self.marker_name.source.as_str())?;
        match self.runtime_dir {
            Some(ref runtime) => {
                writeln!(f, "runtime_dir = {}", runtime.value.display())?;
                writeln!(f, "runtime_source = {}", runtime.source.as_str())?;
            }
            None => writeln!(f, "runtime_dir = (already active)")?,
        }
        writeln!(f, "launcher = {}", self.launcher.value)?;
        write!(f, "launcher_source = {}", self.launcher.source.as_str())
    }
}

impl ConfigSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env",
            Self::Default => "default",
        }
    }
}
