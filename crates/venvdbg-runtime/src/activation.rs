//! Scoped activation of an isolated interpreter runtime.
//!
//! Activation never touches the current process environment. It computes
//! the variables a launched tool needs (`VIRTUAL_ENV`, `PATH`) and hands
//! them to the launcher. The guard logs teardown when dropped, on every exit
//! path.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use venvdbg_core::LaunchRequest;

/// Variables removed from the launched tool's environment.
const CLEARED_VARS: &[&str] = &["PYTHONHOME"];

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

/// Errors from entering a runtime.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The runtime directory does not exist.
    #[error("runtime directory {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The directory exists but has no executables directory.
    #[error("{} is not a runtime environment (no executables directory)", .0.display())]
    NotARuntime(PathBuf),

    /// `PATH` could not be rebuilt with the runtime prepended.
    #[error("cannot build PATH for runtime: {0}")]
    Path(String),
}

/// An entered runtime. Dropping it deactivates.
#[derive(Debug)]
pub struct ActivatedRuntime {
    root: PathBuf,
    bin_dir: PathBuf,
    path_value: String,
}

impl ActivatedRuntime {
    /// Validate `root` and prepare its environment overlay.
    pub fn enter(root: &Path) -> Result<Self, ActivationError> {
        if !root.is_dir() {
            return Err(ActivationError::NotFound(root.to_path_buf()));
        }

        let bin_dir = root.join(BIN_DIR);
        if !bin_dir.is_dir() {
            return Err(ActivationError::NotARuntime(root.to_path_buf()));
        }

        let path_value = prepend_path(&bin_dir, env::var_os("PATH"))?;

        info!("Activated runtime {}", root.display());
        Ok(Self {
            root: root.to_path_buf(),
            bin_dir,
            path_value,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Variables to set for a tool launched inside the runtime.
    pub fn overlay(&self) -> Vec<(String, String)> {
        vec![
            (
                "VIRTUAL_ENV".to_string(),
                self.root.to_string_lossy().into_owned(),
            ),
            ("PATH".to_string(), self.path_value.clone()),
        ]
    }

    /// Attach the overlay to a launch request.
    pub fn apply(&self, request: LaunchRequest) -> LaunchRequest {
        request
            .with_env(self.overlay())
            .without_env(CLEARED_VARS.iter().copied())
    }
}

impl Drop for ActivatedRuntime {
    fn drop(&mut self) {
        info!("Deactivated runtime {}", self.root.display());
    }
}

fn prepend_path(bin_dir: &Path, current: Option<OsString>) -> Result<String, ActivationError> {
    let mut parts = vec![bin_dir.to_path_buf()];
    if let Some(current) = current {
        parts.extend(env::split_paths(&current));
    }
    let joined = env::join_paths(parts).map_err(|e| ActivationError::Path(e.to_string()))?;
    debug!("Runtime PATH = {}", joined.to_string_lossy());
    joined
        .into_string()
        .map_err(|_| ActivationError::Path("PATH is not valid unicode".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_dir_is_not_found() {
        let temp = tempdir().unwrap();
        let err = ActivatedRuntime::enter(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ActivationError::NotFound(_)));
    }

    #[test]
    fn dir_without_bin_is_rejected() {
        let temp = tempdir().unwrap();
        let err = ActivatedRuntime::enter(temp.path()).unwrap_err();
        assert!(matches!(err, ActivationError::NotARuntime(_)));
    }

    #[test]
    fn path_gets_bin_prepended() {
        let bin = PathBuf::from("/opt/tox/functional/bin");
        let joined = prepend_path(
            &bin,
            Some(env::join_paths(["/usr/bin", "/bin"]).unwrap()),
        )
        .unwrap();
        let parts: Vec<PathBuf> = env::split_paths(&joined).collect();
        assert_eq!(parts[0], bin);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn apply_sets_virtual_env_and_clears_pythonhome() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(BIN_DIR)).unwrap();

        let runtime = ActivatedRuntime::enter(temp.path()).unwrap();
        let request = runtime.apply(LaunchRequest::new("/tmp/envA", "/tmp"));

        let virtual_env = request
            .env
            .iter()
            .find(|(k, _)| k == "VIRTUAL_ENV")
            .map(|(_, v)| v.as_str());
        assert_eq!(virtual_env, Some(temp.path().to_string_lossy().as_ref()));
        assert!(request.env.iter().any(|(k, v)| k == "PATH"
            && v.starts_with(runtime.bin_dir().to_string_lossy().as_ref())));
        assert_eq!(request.remove_env, ["PYTHONHOME"]);
    }
}
