//! Marker file parsing.
//!
//! Format: the first line is the environment identifier, every following
//! line is a `testName:extra` entry. Parsing never fails on a bad entry; the
//! caller decides whether to skip or count it.

use thiserror::Error;

use crate::domain::MarkerEntry;

/// Why a single marker line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerLineError {
    #[error("empty line")]
    Empty,
    #[error("missing test name")]
    MissingTestName,
    #[error("not valid UTF-8")]
    InvalidUtf8,
}

/// Parse one entry line.
///
/// Trailing whitespace (including `\r` from CRLF files) is dropped before
/// splitting on the first `:`.
pub fn parse_entry_line(line: &[u8]) -> Result<MarkerEntry, MarkerLineError> {
    let text = std::str::from_utf8(line).map_err(|_| MarkerLineError::InvalidUtf8)?;
    let text = text.trim_end();
    if text.trim_start().is_empty() {
        return Err(MarkerLineError::Empty);
    }

    let (test_name, extra) = match text.split_once(':') {
        Some((name, extra)) => (name, Some(extra)),
        None => (text, None),
    };
    if test_name.trim().is_empty() {
        return Err(MarkerLineError::MissingTestName);
    }

    Ok(MarkerEntry {
        raw: text.to_string(),
        test_name: test_name.to_string(),
        extra: extra.map(str::to_string),
    })
}

/// Parse the identifier line. Returns `None` when it is blank or not UTF-8.
pub fn parse_identifier_line(line: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(line).ok()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Result of parsing a whole marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarker {
    pub identifier: String,
    pub entries: Vec<MarkerEntry>,
    /// Number of entry lines that were skipped.
    pub skipped: usize,
}

/// Parse marker file contents.
///
/// Returns `None` when the identifier line is missing or unusable; in that
/// case the whole file is ignored.
pub fn parse_marker(contents: &[u8]) -> Option<ParsedMarker> {
    let mut lines = contents.split(|b| *b == b'\n');
    let identifier = parse_identifier_line(lines.next()?)?;

    let mut entries = Vec::new();
    let mut skipped = 0;
    for (offset, line) in lines.enumerate() {
        match parse_entry_line(line) {
            Ok(entry) => entries.push(entry),
            Err(MarkerLineError::Empty) if matches!(line, [] | [b'\r']) => {
                // Trailing newline or blank separator; not worth counting.
            }
            Err(err) => {
                tracing::debug!(
                    identifier = %identifier,
                    line = offset + 2,
                    "Skipping malformed marker entry: {err}"
                );
                skipped += 1;
            }
        }
    }

    Some(ParsedMarker {
        identifier,
        entries,
        skipped,
    })
}
