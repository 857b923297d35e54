//! Listing output for records and pattern matches.

use std::fmt::Write;

use venvdbg_core::{EnvironmentRecord, IndexedEntry};

/// One block per environment: identifier, then indented entries.
pub fn render_records(records: &[EnvironmentRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", record.identifier);
        if record.is_empty() {
            let _ = writeln!(out, "    (no tests recorded)");
        }
        for entry in &record.entries {
            let _ = writeln!(out, "    {entry}");
        }
    }
    out
}

/// One line per matching entry; the first one is what `resolve` picks.
pub fn render_matches(hits: &[IndexedEntry]) -> String {
    let mut out = String::new();
    for (position, hit) in hits.iter().enumerate() {
        let marker = if position == 0 { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {}  {}", hit.identifier, hit.entry);
    }
    out
}
