//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports contain no implementation details; adapters live in
//! `venvdbg-runtime`.

pub mod launcher;

pub use launcher::{InspectionLauncher, LaunchError, LaunchOutcome, LaunchRequest};
