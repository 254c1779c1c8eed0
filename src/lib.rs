/*!
 * deguid - Strip GUID-style identifier suffixes from exported file trees
 *
 * Exports from tools that append pseudo-unique identifiers to every file and
 * folder name quickly run into Windows path-length limits and make re-import
 * painful. This library walks such a tree, computes a rename plan that strips
 * the identifier tokens (resolving name collisions), and either reports the
 * plan (dry run) or applies it, optionally rewriting links in text files so
 * the tree stays internally consistent.
 */

pub mod config;
pub mod error;
pub mod executor;
pub mod pattern;
pub mod planner;
pub mod report;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{DeguidError, Result};
pub use executor::Executor;
pub use pattern::SuffixPattern;
pub use planner::Planner;
pub use report::{ReportFormat, Reporter, RunReport};
pub use types::{EntryKind, EntryStatus, PlannedRename, RenameOutcome, RenamePlan};
pub use utils::count_entries;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
