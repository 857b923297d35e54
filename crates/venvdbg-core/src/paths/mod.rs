//! Configuration and path resolution for venvdbg.
//!
//! Every setting resolves as: explicit value, then `VENVDBG_*` environment
//! variable, then a built-in default. Resolution happens once at the
//! boundary; the index and resolver only ever see concrete values.

mod error;
mod platform;
mod resolver;
mod settings;

#[cfg(test)]
mod test_utils;

pub use error::PathError;
pub use platform::{default_launcher, default_venv_root};
pub use resolver::{ConfigOverrides, ResolvedConfig};
pub use settings::{
    ConfigSource, LAUNCHER_ENV, MARKER_NAME_ENV, RUNTIME_DIR_ENV, Resolved, VENV_ROOT_ENV,
    resolve_launcher, resolve_marker_name, resolve_runtime_dir, resolve_venv_root,
};
