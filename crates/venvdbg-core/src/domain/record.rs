//! Environment record types.
//!
//! These types mirror what the test framework writes into a marker file:
//! the environment identifier followed by one line per test that ran in it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One recorded line of a marker file.
///
/// A line has the shape `testName:extra`, where `extra` is usually a
/// timestamp or sequence number. A line without a `:` is a bare test name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    /// The full recorded line, trailing whitespace removed.
    pub raw: String,
    /// Text before the first `:`.
    pub test_name: String,
    /// Text after the first `:`, if present.
    pub extra: Option<String>,
}

impl MarkerEntry {
    /// Build an entry from its test name and optional extra field.
    pub fn new(test_name: impl Into<String>, extra: Option<&str>) -> Self {
        let test_name = test_name.into();
        let raw = match extra {
            Some(extra) => format!("{test_name}:{extra}"),
            None => test_name.clone(),
        };
        Self {
            raw,
            test_name,
            extra: extra.map(str::to_string),
        }
    }
}

impl fmt::Display for MarkerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A disposable virtual environment as described by its marker file.
///
/// Records are produced by the test suite; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// Opaque identifier (normally the environment's directory path).
    pub identifier: String,
    /// Entries in recorded append order.
    pub entries: Vec<MarkerEntry>,
    /// Marker file the record was read from.
    pub source: PathBuf,
}

impl EnvironmentRecord {
    /// Whether any test was recorded in this environment.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
