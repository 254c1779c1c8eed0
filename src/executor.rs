/*!
 * Plan application and link rewriting
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::types::{EntryStatus, PlannedRename, RenamePlan, RenameOutcome};
use crate::utils::{encode_link_fragment, is_text_like};

/// Applies a precomputed rename plan
pub struct Executor {
    /// Executor configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Executor {
    /// Create a new executor
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Apply every rename in the plan, deepest entries first
    ///
    /// Failures are recorded per entry and the run continues; one locked or
    /// permission-denied entry never aborts the rest.
    pub fn execute(&self, plan: &RenamePlan) -> Vec<RenameOutcome> {
        let mut outcomes = Vec::with_capacity(plan.renames.len());

        for rename in &plan.renames {
            self.progress.inc(1);
            self.progress
                .set_message(format!("Renaming: {}", rename.source_name()));
            outcomes.push(self.apply_one(rename));
        }

        outcomes
    }

    /// Preview outcomes for a dry run; the filesystem is never touched
    pub fn preview(&self, plan: &RenamePlan) -> Vec<RenameOutcome> {
        plan.renames
            .iter()
            .map(|rename| RenameOutcome {
                source: rename.source.clone(),
                target: rename.target.clone(),
                kind: rename.kind,
                status: EntryStatus::Planned,
                error: None,
            })
            .collect()
    }

    fn apply_one(&self, rename: &PlannedRename) -> RenameOutcome {
        // Collision resolution claimed a free name at plan time; anything
        // occupying it now appeared after planning, so refuse to clobber it.
        if rename.target.exists() {
            return RenameOutcome {
                source: rename.source.clone(),
                target: rename.target.clone(),
                kind: rename.kind,
                status: EntryStatus::TargetExists,
                error: Some("target name already exists".to_string()),
            };
        }

        let (status, error) = match fs::rename(&rename.source, &rename.target) {
            Ok(()) => (EntryStatus::Renamed, None),
            Err(e) => (EntryStatus::Failed, Some(e.to_string())),
        };

        RenameOutcome {
            source: rename.source.clone(),
            target: rename.target.clone(),
            kind: rename.kind,
            status,
            error,
        }
    }

    /// Rewrite link fragments referencing renamed entries inside text files
    ///
    /// Runs before the renames are applied, while the walk still sees the
    /// original paths. In dry-run mode nothing is written; the return value is
    /// the number of files that changed (or would change).
    pub fn rewrite_links(&self, plan: &RenamePlan) -> usize {
        let replacements = link_replacements(plan);
        if replacements.is_empty() {
            return 0;
        }

        let mut changed = 0;
        for entry in WalkDir::new(&self.config.target_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() || !is_text_like(entry.path()) {
                continue;
            }
            if self.rewrite_file(entry.path(), &replacements) {
                changed += 1;
            }
        }

        changed
    }

    fn rewrite_file(&self, path: &Path, replacements: &[(String, String)]) -> bool {
        // Non-UTF8 content is skipped, same as any other per-entry failure
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                return false;
            }
        };

        let mut rewritten = content.clone();
        for (old, new) in replacements {
            if rewritten.contains(old.as_str()) {
                rewritten = rewritten.replace(old.as_str(), new);
            }
        }

        if rewritten == content {
            return false;
        }

        if self.config.apply {
            if let Err(e) = fs::write(path, rewritten) {
                eprintln!("Error rewriting links in {}: {}", path.display(), e);
                return false;
            }
        }

        true
    }
}

/// Replacement pairs for every renamed entry
///
/// Links in exported files reference names both raw and percent-encoded
/// ("Page%20abc...md"), so each rename contributes up to two pairs.
fn link_replacements(plan: &RenamePlan) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for rename in &plan.renames {
        let old = rename.source_name();
        let new = rename.target_name();

        let old_encoded = encode_link_fragment(&old);
        if old_encoded != old {
            pairs.push((old_encoded, encode_link_fragment(&new)));
        }
        pairs.push((old, new));
    }

    pairs
}
