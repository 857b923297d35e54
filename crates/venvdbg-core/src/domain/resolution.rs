//! Selector and resolution result types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::ResolveError;

/// What the caller asked to resolve.
///
/// A selector is either a pattern searched over recorded test names, or an
/// explicit environment identifier that bypasses the index entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Regular expression searched anywhere inside each recorded line.
    Pattern(String),
    /// Environment identifier supplied directly by the caller.
    Explicit(String),
}

impl Selector {
    /// Build a selector from the two mutually exclusive inputs.
    ///
    /// Blank values count as absent. Both present is rejected even when
    /// each would resolve on its own.
    pub fn from_parts(
        pattern: Option<&str>,
        explicit: Option<&str>,
    ) -> Result<Self, ResolveError> {
        let pattern = pattern.filter(|p| !p.is_empty());
        let explicit = explicit.map(str::trim).filter(|id| !id.is_empty());

        match (pattern, explicit) {
            (Some(_), Some(_)) => Err(ResolveError::ConflictingSelectors),
            (Some(pattern), None) => Ok(Self::Pattern(pattern.to_string())),
            (None, Some(id)) => Ok(Self::Explicit(id.to_string())),
            (None, None) => Err(ResolveError::MissingSelector),
        }
    }
}

/// The single environment a selector resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Identifier of the environment to hand to the inspection step.
    pub identifier: String,
    /// Full recorded line that matched; `None` for explicit identifiers.
    pub matched_test_name: Option<String>,
    /// Marker file holding the matched line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ResolutionResult {
    /// Result for an identifier given directly by the caller.
    pub fn explicit(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            matched_test_name: None,
            source: None,
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "identifier = {}", self.identifier)?;
        if let Some(ref test) = self.matched_test_name {
            write!(f, "\nmatched_test = {test}")?;
        }
        Ok(())
    }
}
