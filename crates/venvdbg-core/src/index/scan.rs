//! Metadata index over a virtual-environment root.
//!
//! Layout: each immediate subdirectory of the root that holds a marker file
//! is one environment. Marker files are enumerated in lexicographic path
//! order so that "first match" is stable from one run to the next.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::marker::{ParsedMarker, parse_marker};
use crate::domain::{EnvironmentRecord, MarkerEntry};
use crate::error::ResolveError;

/// Default name of the per-environment marker file.
pub const DEFAULT_MARKER_NAME: &str = ".venvdbg-tests";

/// One marker entry together with the environment it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    /// Marker file the entry was read from.
    pub source: PathBuf,
    /// Identifier of the owning environment.
    pub identifier: String,
    pub entry: MarkerEntry,
}

/// Counters collected while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Marker files found under the root.
    pub files: usize,
    /// Marker files ignored because they were unreadable or had no identifier.
    pub skipped_files: usize,
    /// Entry lines dropped as malformed.
    pub skipped_lines: usize,
}

/// Read-only view of every marker file under a root directory.
///
/// The index holds no cached state: each enumeration re-reads the root.
#[derive(Debug, Clone)]
pub struct MetadataIndex {
    root: PathBuf,
    marker_name: String,
}

impl MetadataIndex {
    /// Create an index over `root` looking for files called `marker_name`.
    pub fn new(root: impl Into<PathBuf>, marker_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            marker_name: marker_name.into(),
        }
    }

    /// Create an index using [`DEFAULT_MARKER_NAME`].
    pub fn with_default_marker(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_MARKER_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker_name(&self) -> &str {
        &self.marker_name
    }

    /// Locate marker files, sorted by path.
    ///
    /// Fails with `NoEnvironmentsFound` when the root is missing, is not a
    /// directory, or holds no marker files.
    pub fn marker_files(&self) -> Result<Vec<PathBuf>, ResolveError> {
        let not_found = || ResolveError::NoEnvironmentsFound {
            root: self.root.clone(),
        };

        let read_dir = fs::read_dir(&self.root).map_err(|e| {
            debug!("Cannot read venv root {}: {e}", self.root.display());
            not_found()
        })?;

        let mut markers: Vec<PathBuf> = read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.path().join(&self.marker_name))
            .filter(|path| path.is_file())
            .collect();

        if markers.is_empty() {
            return Err(not_found());
        }

        markers.sort();
        debug!(
            "Found {} marker files under {}",
            markers.len(),
            self.root.display()
        );
        Ok(markers)
    }

    /// Lazily enumerate every entry across all records.
    ///
    /// Files are read only when iteration reaches them. Unreadable files and
    /// files without an identifier are skipped.
    pub fn entries(&self) -> Result<Entries, ResolveError> {
        let files = self.marker_files()?;
        Ok(Entries {
            files: files.into_iter(),
            current: None,
            stats: ScanStats::default(),
        })
    }

    /// Read every record eagerly, in enumeration order.
    pub fn records(&self) -> Result<(Vec<EnvironmentRecord>, ScanStats), ResolveError> {
        let files = self.marker_files()?;
        let mut stats = ScanStats::default();
        let mut records = Vec::with_capacity(files.len());

        for path in files {
            stats.files += 1;
            let Some(parsed) = read_marker(&path) else {
                stats.skipped_files += 1;
                continue;
            };
            stats.skipped_lines += parsed.skipped;
            records.push(EnvironmentRecord {
                identifier: parsed.identifier,
                entries: parsed.entries,
                source: path,
            });
        }

        Ok((records, stats))
    }
}

fn read_marker(path: &Path) -> Option<ParsedMarker> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Skipping unreadable marker file {}: {e}", path.display());
            return None;
        }
    };

    let parsed = parse_marker(&contents);
    if parsed.is_none() {
        warn!(
            "Skipping marker file without an environment identifier: {}",
            path.display()
        );
    }
    parsed
}

/// Iterator returned by [`MetadataIndex::entries`].
#[derive(Debug)]
pub struct Entries {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<CurrentFile>,
    stats: ScanStats,
}

#[derive(Debug)]
struct CurrentFile {
    source: PathBuf,
    identifier: String,
    entries: std::vec::IntoIter<MarkerEntry>,
}

impl Entries {
    /// Counters for the files consumed so far.
    pub const fn stats(&self) -> ScanStats {
        self.stats
    }
}

impl Iterator for Entries {
    type Item = IndexedEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(entry) = current.entries.next() {
                    return Some(IndexedEntry {
                        source: current.source.clone(),
                        identifier: current.identifier.clone(),
                        entry,
                    });
                }
            }

            let path = self.files.next()?;
            self.stats.files += 1;
            self.current = match read_marker(&path) {
                Some(parsed) => {
                    self.stats.skipped_lines += parsed.skipped;
                    Some(CurrentFile {
                        source: path,
                        identifier: parsed.identifier,
                        entries: parsed.entries.into_iter(),
                    })
                }
                None => {
                    self.stats.skipped_files += 1;
                    None
                }
            };
        }
    }
}
