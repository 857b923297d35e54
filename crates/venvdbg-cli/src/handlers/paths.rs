//! Paths command handler.
//!
//! Displays the resolved configuration for diagnostics. This is the tool to
//! reach for when `resolve` says no environments exist.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints every setting in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.config);
    Ok(())
}
