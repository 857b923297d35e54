//! Helpers for settings tests that mutate `VENVDBG_*` and `SHELL`.

use std::env;
use std::sync::Mutex;

/// Held for the whole test by anything reading or writing `VENVDBG_*` or `SHELL`.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Puts one variable back the way the test found it when dropped.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    fn remember(key: &str) -> Self {
        Self {
            key: key.to_string(),
            previous: env::var(key).ok(),
        }
    }

    /// Override `key` for the guard's lifetime.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let guard = Self::remember(key);
        // SAFETY: callers hold ENV_LOCK
        unsafe { env::set_var(key, value) };
        guard
    }

    /// Hide `key` for the guard's lifetime.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let guard = Self::remember(key);
        // SAFETY: callers hold ENV_LOCK
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the owning test still holds ENV_LOCK
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(&self.key, value) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
