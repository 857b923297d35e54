//! Core domain types.
//!
//! These types represent environments and resolutions, independent of how
//! marker files are laid out on disk.

mod record;
mod resolution;

pub use record::{EnvironmentRecord, MarkerEntry};
pub use resolution::{ResolutionResult, Selector};
