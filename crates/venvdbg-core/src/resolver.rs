//! Environment resolver.
//!
//! Turns a [`Selector`] into exactly one [`ResolutionResult`]. Patterns are
//! searched anywhere inside each recorded line and the first entry in
//! enumeration order wins; later matches are never looked at.

use regex::Regex;
use tracing::debug;

use crate::domain::{ResolutionResult, Selector};
use crate::error::ResolveError;
use crate::index::{IndexedEntry, MetadataIndex};

/// How a pattern string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternSyntax {
    /// Regular expression.
    #[default]
    Regex,
    /// Plain substring, regex metacharacters escaped.
    Literal,
}

/// Stateless resolver over a [`MetadataIndex`].
#[derive(Debug, Clone)]
pub struct Resolver {
    index: MetadataIndex,
    syntax: PatternSyntax,
}

impl Resolver {
    pub const fn new(index: MetadataIndex) -> Self {
        Self {
            index,
            syntax: PatternSyntax::Regex,
        }
    }

    /// Set how patterns are interpreted.
    #[must_use]
    pub const fn with_syntax(mut self, syntax: PatternSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub const fn index(&self) -> &MetadataIndex {
        &self.index
    }

    /// Resolve a selector to one environment.
    ///
    /// Explicit identifiers are returned trimmed without reading the index.
    /// An empty pattern or a blank identifier is `MissingSelector`, the same
    /// as [`Selector::from_parts`] with no input.
    pub fn resolve(&self, selector: &Selector) -> Result<ResolutionResult, ResolveError> {
        match selector {
            Selector::Explicit(identifier) => {
                let identifier = identifier.trim();
                if identifier.is_empty() {
                    return Err(ResolveError::MissingSelector);
                }
                debug!("Using explicit environment identifier {identifier}");
                Ok(ResolutionResult::explicit(identifier))
            }
            Selector::Pattern(pattern) if pattern.is_empty() => Err(ResolveError::MissingSelector),
            Selector::Pattern(pattern) => self.resolve_pattern(pattern),
        }
    }

    /// Convenience wrapper taking the two raw selector inputs.
    pub fn resolve_parts(
        &self,
        pattern: Option<&str>,
        explicit: Option<&str>,
    ) -> Result<ResolutionResult, ResolveError> {
        self.resolve(&Selector::from_parts(pattern, explicit)?)
    }

    fn resolve_pattern(&self, pattern: &str) -> Result<ResolutionResult, ResolveError> {
        let regex = self.compile(pattern)?;
        let mut entries = self.index.entries()?;

        let found = entries.by_ref().find(|e| regex.is_match(&e.entry.raw));
        match found {
            Some(hit) => {
                debug!(
                    "Pattern '{pattern}' matched '{}' in {}",
                    hit.entry.raw,
                    hit.source.display()
                );
                Ok(ResolutionResult {
                    identifier: hit.identifier,
                    matched_test_name: Some(hit.entry.raw),
                    source: Some(hit.source),
                })
            }
            None => Err(ResolveError::NoMatchFound {
                pattern: pattern.to_string(),
                skipped_lines: entries.stats().skipped_lines,
            }),
        }
    }

    /// Every entry matching `pattern`, in enumeration order.
    ///
    /// The first element is what [`Resolver::resolve`] would pick. An empty
    /// result is not an error here.
    pub fn matches(&self, pattern: &str) -> Result<Vec<IndexedEntry>, ResolveError> {
        let regex = self.compile(pattern)?;
        Ok(self
            .index
            .entries()?
            .filter(|e| regex.is_match(&e.entry.raw))
            .collect())
    }

    fn compile(&self, pattern: &str) -> Result<Regex, ResolveError> {
        let source = match self.syntax {
            PatternSyntax::Regex => pattern.to_string(),
            PatternSyntax::Literal => regex::escape(pattern),
        };
        Regex::new(&source).map_err(|e| ResolveError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
    }
}
