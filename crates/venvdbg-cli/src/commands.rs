//! Commands enum and shared argument groups.

use clap::{Args, Subcommand};
use venvdbg_core::{PatternSyntax, Selector};

use crate::error::CliError;

/// Pattern or explicit identifier selecting one environment.
///
/// The two are mutually exclusive; the resolver reports misuse so every
/// command fails the same way.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectorArgs {
    /// Regular expression searched in recorded test names
    #[arg(short = 't', long = "test", value_name = "PATTERN")]
    pub test: Option<String>,

    /// Environment identifier to use directly, skipping the search
    #[arg(short = 'e', long = "env", value_name = "ID")]
    pub env: Option<String>,

    /// Treat the pattern as a literal string instead of a regex
    #[arg(short = 'F', long = "fixed-strings")]
    pub fixed_strings: bool,
}

impl SelectorArgs {
    /// Build the core selector.
    pub fn selector(&self) -> Result<Selector, CliError> {
        Ok(Selector::from_parts(
            self.test.as_deref(),
            self.env.as_deref(),
        )?)
    }

    pub const fn syntax(&self) -> PatternSyntax {
        pattern_syntax(self.fixed_strings)
    }
}

/// Map the `-F/--fixed-strings` flag to a pattern syntax.
pub const fn pattern_syntax(fixed_strings: bool) -> PatternSyntax {
    if fixed_strings {
        PatternSyntax::Literal
    } else {
        PatternSyntax::Regex
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a test pattern to the environment it ran in
    Resolve {
        #[command(flatten)]
        selector: SelectorArgs,
        /// Print the result as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,
        /// Print only the environment identifier
        #[arg(short, long)]
        quiet: bool,
    },

    /// Resolve an environment and launch the inspection command inside it
    Debug {
        #[command(flatten)]
        selector: SelectorArgs,
        /// Runtime to activate for the launched command (e.g. a tox env)
        #[arg(long = "runtime-dir", value_name = "DIR")]
        runtime_dir: Option<String>,
        /// Command line to launch; `{env}` and `{root}` are substituted
        #[arg(long, value_name = "CMD")]
        launcher: Option<String>,
    },

    /// List environments, or every entry matching a pattern
    List {
        /// Only show entries matching this regular expression
        #[arg(short = 't', long = "test", value_name = "PATTERN")]
        test: Option<String>,
        /// Treat the pattern as a literal string instead of a regex
        #[arg(short = 'F', long = "fixed-strings")]
        fixed_strings: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration and where each value came from
    Paths,
}
