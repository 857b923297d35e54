//! Command-line adapter for venvdbg.
//!
//! `main.rs` parses arguments, bootstraps a [`CliContext`] and dispatches to
//! [`handlers`]. Everything here is also reachable from tests.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary target
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, SelectorArgs};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
