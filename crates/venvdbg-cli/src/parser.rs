//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Locate the virtual environment a test ran in, then inspect it.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "venvdbg")]
#[command(about = "Find and enter test-created virtual environments")]
#[command(version)]
pub struct Cli {
    /// Directory holding the test-created environments (default: system temp dir)
    #[arg(long = "root", global = true, value_name = "DIR")]
    pub root: Option<String>,

    /// Name of the per-environment marker file
    #[arg(long = "marker", global = true, value_name = "NAME")]
    pub marker: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
