//! CLI bootstrap - the composition root.
//!
//! Settings are resolved once here and passed down as plain values; nothing
//! below this layer reads the process environment.

use tracing::debug;
use venvdbg_core::{ConfigOverrides, MetadataIndex, PatternSyntax, ResolvedConfig, Resolver};
use venvdbg_runtime::CommandLauncher;

use crate::error::CliError;

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: ResolvedConfig,
    index: MetadataIndex,
}

impl CliContext {
    /// Build a context from already-resolved settings.
    pub fn new(config: ResolvedConfig) -> Self {
        let index = MetadataIndex::new(
            config.venv_root.value.clone(),
            config.marker_name.value.clone(),
        );
        Self { config, index }
    }

    pub const fn index(&self) -> &MetadataIndex {
        &self.index
    }

    /// A resolver over the configured index.
    pub fn resolver(&self, syntax: PatternSyntax) -> Resolver {
        Resolver::new(self.index.clone()).with_syntax(syntax)
    }

    /// The configured inspection command.
    pub fn launcher(&self) -> Result<CommandLauncher, CliError> {
        Ok(CommandLauncher::from_command_line(
            &self.config.launcher.value,
        )?)
    }
}

/// Resolve settings and compose the CLI context.
pub fn bootstrap(overrides: &ConfigOverrides) -> Result<CliContext, CliError> {
    let config = ResolvedConfig::resolve_with(overrides)?;
    debug!(
        root = %config.venv_root.value.display(),
        marker = %config.marker_name.value,
        "Resolved configuration"
    );
    Ok(CliContext::new(config))
}
