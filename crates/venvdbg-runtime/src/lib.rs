//! OS-level adapters for venvdbg: runtime activation and the command launcher.
#![deny(unsafe_code)]

mod activation;
mod launcher;

pub use activation::{ActivatedRuntime, ActivationError};
pub use launcher::{
    CommandLauncher, ENV_ID_VAR, ENV_PLACEHOLDER, ENV_ROOT_VAR, ROOT_PLACEHOLDER,
};
