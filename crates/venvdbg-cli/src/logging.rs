//! Logging setup for the binary.
//!
//! Logs go to stderr so stdout stays clean for `$(venvdbg resolve -q ...)`.

use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,venvdbg=debug,venvdbg_cli=debug,venvdbg_core=debug,venvdbg_runtime=debug";

/// Filter directives for the given verbosity, used when `RUST_LOG` is unset.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { QUIET_FILTER }
}

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
