//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<...>`
//! - Thin wrappers that:
//!   1. Turn CLI arguments into core selectors
//!   2. Call the resolver / launcher
//!   3. Format output for the terminal
//!
//! Handlers never read the process environment; `bootstrap` already did.

pub mod debug;
pub mod list;
pub mod paths;
pub mod resolve;
