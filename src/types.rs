/*!
 * Core types and data structures for the deguid application
 */

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Kind of filesystem entry a plan touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "dir"),
        }
    }
}

/// A single planned rename, computed before any filesystem mutation
#[derive(Debug, Clone)]
pub struct PlannedRename {
    /// Absolute path of the entry as it exists on disk
    pub source: PathBuf,
    /// Absolute path the entry will be renamed to (same parent directory)
    pub target: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
    /// Depth below the scan root, used for deepest-first ordering
    pub depth: usize,
}

impl PlannedRename {
    /// Final component of the source path
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// Final component of the target path
    pub fn target_name(&self) -> String {
        self.target
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// The complete, precomputed rename mapping for one invocation
///
/// Renames are ordered deepest-first so that applying a directory rename
/// never invalidates a pending child path.
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    /// Planned renames, deepest entries first
    pub renames: Vec<PlannedRename>,
    /// Total number of entries walked, renamed or not
    pub entries_scanned: usize,
}

/// Status of a single plan entry after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Dry run: the entry would be renamed
    Planned,
    /// Apply: the rename succeeded
    Renamed,
    /// Apply: the target name already existed on disk
    TargetExists,
    /// Apply: the rename syscall failed
    Failed,
}

/// Per-entry result row for the run report
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutcome {
    /// Original path
    pub source: PathBuf,
    /// Computed new path
    pub target: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
    /// What happened (or would happen) to the entry
    pub status: EntryStatus,
    /// OS error text for failed entries
    pub error: Option<String>,
}
