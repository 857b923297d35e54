//! List command handler.
//!
//! Without a pattern, shows every environment and the tests recorded in it.
//! With a pattern, shows every matching entry so the user can see why
//! `resolve` picked the one it did and narrow the pattern.

use anyhow::Result;
use tracing::info;
use venvdbg_core::PatternSyntax;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_matches, render_records};

/// Execute the list command.
pub fn execute(
    ctx: &CliContext,
    pattern: Option<&str>,
    syntax: PatternSyntax,
    json: bool,
) -> Result<()> {
    match pattern.filter(|p| !p.is_empty()) {
        Some(pattern) => list_matches(ctx, pattern, syntax, json),
        None => list_records(ctx, json),
    }
}

fn list_records(ctx: &CliContext, json: bool) -> Result<()> {
    let (records, stats) = ctx.index().records().map_err(CliError::from)?;
    if stats.skipped_files > 0 || stats.skipped_lines > 0 {
        info!(
            skipped_files = stats.skipped_files,
            skipped_lines = stats.skipped_lines,
            "Some marker data was unreadable"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", render_records(&records));
    }
    Ok(())
}

fn list_matches(ctx: &CliContext, pattern: &str, syntax: PatternSyntax, json: bool) -> Result<()> {
    let hits = ctx
        .resolver(syntax)
        .matches(pattern)
        .map_err(CliError::from)?;

    if json {
        let rows: Vec<serde_json::Value> = hits
            .iter()
            .map(|hit| {
                serde_json::json!({
                    "identifier": hit.identifier,
                    "test": hit.entry.raw,
                    "source": hit.source,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if hits.is_empty() {
        eprintln!("No entries match '{pattern}'.");
    } else {
        print!("{}", render_matches(&hits));
    }
    Ok(())
}
