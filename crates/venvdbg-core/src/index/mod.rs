//! Metadata index: marker file parsing and enumeration.

mod marker;
mod scan;

pub use marker::{MarkerLineError, ParsedMarker, parse_entry_line, parse_marker};
pub use scan::{DEFAULT_MARKER_NAME, Entries, IndexedEntry, MetadataIndex, ScanStats};
