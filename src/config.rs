/*!
 * Configuration handling for deguid
 */

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::{DeguidError, Result, ResultExt};
use crate::pattern::DEFAULT_TOKEN_LENGTH;
use crate::report::ReportFormat;

/// Command-line arguments for deguid
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "deguid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip GUID-style identifier suffixes from exported file and directory names",
    long_about = "Walks an exported directory tree and strips the pseudo-unique identifier tokens appended to file and folder names, to keep paths short and names clean for re-import. Dry run by default; pass --apply to rename."
)]
pub struct Args {
    /// Root directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Apply the renames (default is a dry run that only reports the plan)
    #[clap(long)]
    pub apply: bool,

    /// Rewrite links referencing renamed entries inside text files
    #[clap(long)]
    pub rewrite_links: bool,

    /// Minimum identifier token length to strip
    #[clap(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub token_length: usize,

    /// Comma-separated list of patterns to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Comma-separated list of patterns to include (if specified, only matching entries are renamed)
    #[clap(long, value_delimiter = ',')]
    pub include_patterns: Vec<String>,

    /// Report output format
    #[clap(long, value_enum, default_value_t = ReportFormat::default())]
    pub format: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub target_dir: PathBuf,

    /// Apply renames instead of only reporting the plan
    pub apply: bool,

    /// Rewrite links inside text files to match the renames
    pub rewrite_links: bool,

    /// Minimum identifier token length to strip
    pub token_length: usize,

    /// Patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Patterns to include (if empty, include all)
    pub include_patterns: Vec<String>,

    /// Report output format
    pub format: ReportFormat,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            apply: args.apply,
            rewrite_links: args.rewrite_links,
            token_length: args.token_length,
            ignore_patterns: args.ignore_patterns,
            include_patterns: args.include_patterns,
            format: args.format,
        }
    }

    /// Validate the configuration
    ///
    /// A missing or unlistable root directory is fatal; nothing can be
    /// processed, so this must fail before any plan is computed.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(DeguidError::PathNotFound(
                self.target_dir.display().to_string(),
            ));
        }

        fs::read_dir(&self.target_dir)
            .with_context(|| format!("cannot list root directory {}", self.target_dir.display()))?;

        ensure!(
            self.token_length > 0,
            Config,
            "identifier token length must be at least 1"
        );

        Ok(())
    }
}
