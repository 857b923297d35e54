//! Resolution error taxonomy.
//!
//! Every variant is terminal for a single resolution call. Malformed marker
//! lines never show up here; the index skips them and only reports how many
//! were dropped when nothing matched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::Resolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a pattern nor an explicit identifier was given.
    #[error("no selector given: pass a test pattern or an environment identifier")]
    MissingSelector,

    /// Both a pattern and an explicit identifier were given.
    #[error("a test pattern and an environment identifier are mutually exclusive")]
    ConflictingSelectors,

    /// The root holds no readable marker files.
    #[error("no virtual environments found under {}", root.display())]
    NoEnvironmentsFound { root: PathBuf },

    /// The pattern is not a valid regular expression.
    #[error("invalid test pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The scan completed without a single matching entry.
    #[error("{}", no_match_message(pattern, *skipped_lines))]
    NoMatchFound {
        pattern: String,
        skipped_lines: usize,
    },
}

fn no_match_message(pattern: &str, skipped_lines: usize) -> String {
    if skipped_lines == 0 {
        format!("no environment matched pattern '{pattern}'")
    } else {
        format!(
            "no environment matched pattern '{pattern}' ({skipped_lines} malformed marker lines skipped)"
        )
    }
}

impl ResolveError {
    /// Whether the error comes from how the tool was invoked.
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingSelector | Self::ConflictingSelectors | Self::InvalidPattern { .. }
        )
    }
}
