//! Debug command handler.
//!
//! Resolves an environment, enters the configured runtime (if any) and hands
//! the identifier to the inspection launcher. The runtime guard lives for
//! the whole launch and is released on every exit path.

use anyhow::Result;
use tracing::info;
use venvdbg_core::{InspectionLauncher, LaunchRequest};
use venvdbg_runtime::ActivatedRuntime;

use crate::bootstrap::CliContext;
use crate::commands::SelectorArgs;
use crate::error::CliError;

/// Execute the debug command.
///
/// Returns `Ok(())` when the launched tool exits with status 0. A non-zero
/// exit comes back as [`CliError::ChildExit`] carrying the tool's code.
pub async fn execute(
    ctx: &CliContext,
    args: &SelectorArgs,
    launcher: &dyn InspectionLauncher,
) -> Result<()> {
    let selector = args.selector()?;
    let result = ctx
        .resolver(args.syntax())
        .resolve(&selector)
        .map_err(CliError::from)?;

    match result.matched_test_name {
        Some(ref test) => eprintln!("Entering {} (matched {test})", result.identifier),
        None => eprintln!("Entering {}", result.identifier),
    }

    let runtime = ctx
        .config
        .runtime_dir
        .as_ref()
        .map(|dir| ActivatedRuntime::enter(&dir.value))
        .transpose()
        .map_err(CliError::from)?;

    let mut request = LaunchRequest::for_resolution(&result, ctx.index().root());
    if let Some(ref runtime) = runtime {
        request = runtime.apply(request);
    }

    let outcome = launcher.launch(&request).await.map_err(CliError::from)?;
    info!(exit_code = ?outcome.exit_code, "Inspection session finished");

    if outcome.success() {
        Ok(())
    } else {
        Err(CliError::ChildExit(outcome.exit_code.unwrap_or(1)).into())
    }
}
