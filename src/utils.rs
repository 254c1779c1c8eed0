/*!
 * Utility functions for deguid
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::planner::Planner;

/// Count total entries for progress tracking
pub fn count_entries(dir: &Path, config: &Config) -> Result<u64> {
    let planner = Planner::new(config.clone(), Arc::new(ProgressBar::hidden()))?;
    let mut count = 0;

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !planner.should_ignore(entry.path()) && planner.should_include(entry.path()) {
            count += 1;
        }
    }

    Ok(count)
}

/// Check whether a file is worth scanning for link references
pub fn is_text_like(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| TEXT_EXTENSIONS.iter().any(|&t| t == ext))
}

/// Percent-encode the characters the export source encodes in link targets
pub fn encode_link_fragment(name: &str) -> String {
    name.replace('%', "%25").replace(' ', "%20")
}

/// Extensions treated as text for link rewriting
pub static TEXT_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["md", "markdown", "html", "htm", "csv", "txt"]);

/// Default patterns to ignore
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        ".svn",
        ".hg",
        // OS Files
        ".DS_Store",
        "Thumbs.db",
        "desktop.ini",
    ]
});
