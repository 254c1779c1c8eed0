/*!
 * Rename plan computation
 *
 * Walks the tree, strips identifier suffixes and resolves collisions, all
 * without mutating anything. The resulting plan is ordered deepest-first so
 * the apply phase never renames a directory before its children.
 */

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{DeguidError, Result};
use crate::pattern::SuffixPattern;
use crate::types::{EntryKind, PlannedRename, RenamePlan};
use crate::utils::DEFAULT_IGNORE;

/// Computes the rename plan for a directory tree
pub struct Planner {
    /// Planner configuration
    config: Config,
    /// Identifier suffix detector
    pattern: SuffixPattern,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Planner {
    /// Create a new planner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Result<Self> {
        let pattern = SuffixPattern::new(config.token_length)?;
        Ok(Self {
            config,
            pattern,
            progress,
        })
    }

    /// Walk the target directory and compute the full plan
    ///
    /// The plan is complete before this returns; a dry run and an apply run
    /// over the same tree see identical planned names.
    pub fn plan(&self) -> Result<RenamePlan> {
        let root = fs::canonicalize(&self.config.target_dir)
            .map_err(|_| DeguidError::PathNotFound(self.config.target_dir.display().to_string()))?;

        // Group entries by parent so collisions are resolved per directory
        let mut by_parent: BTreeMap<PathBuf, Vec<(PathBuf, EntryKind, usize)>> = BTreeMap::new();
        let mut entries_scanned = 0;

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        for entry in walker.filter_entry(|e| !self.should_ignore(e.path())) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Error reading entry: {}", e);
                    continue;
                }
            };

            entries_scanned += 1;
            self.progress.inc(1);

            if !self.should_include(entry.path()) {
                continue;
            }

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let parent = entry
                .path()
                .parent()
                .unwrap_or(root.as_path())
                .to_path_buf();

            by_parent.entry(parent).or_default().push((
                entry.path().to_path_buf(),
                kind,
                entry.depth(),
            ));
        }

        let mut renames = Vec::new();
        for (parent, siblings) in &by_parent {
            self.plan_directory(parent, siblings, &mut renames)?;
        }

        // Deepest entries first; path order breaks ties deterministically
        renames.sort_by(|a, b| b.depth.cmp(&a.depth).then_with(|| b.source.cmp(&a.source)));

        Ok(RenamePlan {
            renames,
            entries_scanned,
        })
    }

    /// Resolve final names for the entries of a single directory
    fn plan_directory(
        &self,
        parent: &Path,
        siblings: &[(PathBuf, EntryKind, usize)],
        renames: &mut Vec<PlannedRename>,
    ) -> Result<()> {
        // Every name currently on disk claims its spot, including entries the
        // walk filtered out. Old names are not freed within a run, so the
        // apply order inside one directory never matters.
        let mut taken: HashSet<String> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();

        for (path, kind, depth) in siblings {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let is_dir = *kind == EntryKind::Directory;

            let candidate = match self.pattern.strip_name(&name, is_dir) {
                Some(candidate) => candidate,
                None => continue,
            };

            let final_name = disambiguate(&candidate, is_dir, &taken);
            taken.insert(final_name.clone());

            renames.push(PlannedRename {
                source: path.clone(),
                target: parent.join(final_name),
                kind: *kind,
                depth: *depth,
            });
        }

        Ok(())
    }

    /// Check if an entry should be skipped entirely (subtree included)
    pub fn should_ignore(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        for pattern in &self.config.ignore_patterns {
            if glob_match(pattern, &file_name) {
                return true;
            }
        }

        DEFAULT_IGNORE.iter().any(|&p| p == file_name)
    }

    /// Check if an entry is eligible for renaming based on include patterns
    pub fn should_include(&self, path: &Path) -> bool {
        // If no include patterns, include everything
        if self.config.include_patterns.is_empty() {
            return true;
        }

        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        for pattern in &self.config.include_patterns {
            if glob_match(pattern, &file_name) {
                return true;
            }
        }

        false
    }
}

/// Append a numeric suffix until the candidate name is unused
///
/// Files keep their extension: "Page.md" collides into "Page 1.md", not
/// "Page.md 1". The disambiguated name never re-matches the identifier
/// pattern, so a later run leaves it alone.
fn disambiguate(candidate: &str, is_dir: bool, taken: &HashSet<String>) -> String {
    if !taken.contains(candidate) {
        return candidate.to_string();
    }

    let (stem, ext) = if is_dir {
        (candidate, None)
    } else {
        match candidate.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (candidate, None),
        }
    };

    let mut n = 1;
    loop {
        let attempt = match ext {
            Some(ext) => format!("{} {}.{}", stem, n, ext),
            None => format!("{} {}", stem, n),
        };
        if !taken.contains(&attempt) {
            return attempt;
        }
        n += 1;
    }
}
