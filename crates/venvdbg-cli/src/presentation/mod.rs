//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: functions build strings, handlers decide
//! where they go.

pub mod records;
pub mod resolution;

pub use records::{render_matches, render_records};
pub use resolution::{OutputFormat, render_resolution};
