//! Core of venvdbg: find the test-created virtual environment to debug.
//!
//! A test suite leaves one marker file per disposable environment. The
//! [`MetadataIndex`] enumerates those files under a root directory and the
//! [`Resolver`] turns a test-name pattern (or an explicit identifier) into a
//! single [`ResolutionResult`]. Starting the actual session goes through the
//! [`InspectionLauncher`] port.
//!
//! ```no_run
//! use venvdbg_core::{MetadataIndex, Resolver, Selector};
//!
//! let resolver = Resolver::new(MetadataIndex::with_default_marker("/tmp"));
//! let result = resolver.resolve(&Selector::Pattern("test_add_br".into()))?;
//! println!("{result}");
//! # Ok::<(), venvdbg_core::ResolveError>(())
//! ```
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod index;
pub mod paths;
pub mod ports;
pub mod resolver;

// Re-export commonly used types for convenience
pub use domain::{EnvironmentRecord, MarkerEntry, ResolutionResult, Selector};
pub use error::ResolveError;
pub use index::{DEFAULT_MARKER_NAME, IndexedEntry, MetadataIndex, ScanStats};
pub use paths::{ConfigOverrides, ConfigSource, PathError, Resolved, ResolvedConfig};
pub use ports::{InspectionLauncher, LaunchError, LaunchOutcome, LaunchRequest};
pub use resolver::{PatternSyntax, Resolver};
