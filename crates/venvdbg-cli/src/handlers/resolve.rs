//! Resolve command handler.
//!
//! Prints the environment a pattern (or explicit identifier) resolves to.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::SelectorArgs;
use crate::error::CliError;
use crate::presentation::{OutputFormat, render_resolution};

/// Execute the resolve command.
///
/// Writes the rendered result to stdout. Resolution failures come back as
/// [`CliError`] so `main` can pick the exit code.
pub fn execute(ctx: &CliContext, args: &SelectorArgs, format: OutputFormat) -> Result<()> {
    let selector = args.selector()?;
    let result = ctx
        .resolver(args.syntax())
        .resolve(&selector)
        .map_err(CliError::from)?;

    println!("{}", render_resolution(&result, format)?);
    Ok(())
}
