/*!
 * Reporting functionality for deguid
 *
 * Provides functionality for generating formatted reports of rename runs
 * using the tabled library for clean, consistent table rendering, plus a JSON
 * format for machine consumption.
 */

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{EntryStatus, RenameOutcome};

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    /// JSON output
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::ConsoleTable
    }
}

/// Statistics for one rename run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Root directory processed
    pub root: String,
    /// Whether renames were applied or only planned
    pub applied: bool,
    /// Time taken
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
    /// Total number of entries walked
    pub entries_scanned: usize,
    /// Number of renames in the plan
    pub renames_planned: usize,
    /// Number of renames that succeeded (apply mode)
    pub renamed: usize,
    /// Number of per-entry failures
    pub failed: usize,
    /// Files whose links were (or would be) rewritten
    pub links_rewritten: Option<usize>,
    /// Per-entry result rows
    pub outcomes: Vec<RenameOutcome>,
}

fn serialize_duration<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Report generator for rename runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Truncate a name from the front so the distinctive tail stays visible
    fn truncate_name(&self, name: &str, max_len: usize) -> String {
        let count = name.chars().count();
        if count <= max_len {
            return name.to_string();
        }
        let tail: String = name
            .chars()
            .skip(count.saturating_sub(max_len.saturating_sub(3)))
            .collect();
        format!("...{}", tail)
    }

    fn format_status(&self, outcome: &RenameOutcome) -> String {
        match outcome.status {
            EntryStatus::Planned => "→ planned".to_string(),
            EntryStatus::Renamed => "✓ renamed".to_string(),
            EntryStatus::TargetExists => "⚠ target exists".to_string(),
            EntryStatus::Failed => match &outcome.error {
                Some(error) => format!("✗ {}", error),
                None => "✗ failed".to_string(),
            },
        }
    }

    // Create the per-entry table using the tabled crate
    fn create_entries_table(&self, report: &RunReport) -> String {
        // Define the entries table data structure
        #[derive(Tabled)]
        struct EntryRow {
            #[tabled(rename = "Original")]
            original: String,

            #[tabled(rename = "New Name")]
            new: String,

            #[tabled(rename = "Kind")]
            kind: String,

            #[tabled(rename = "Status")]
            status: String,
        }

        let rows: Vec<EntryRow> = report
            .outcomes
            .iter()
            .map(|outcome| {
                let original = outcome
                    .source
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                let new = outcome
                    .target
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();

                EntryRow {
                    original: self.truncate_name(&original, 60),
                    new: self.truncate_name(&new, 40),
                    kind: outcome.kind.to_string(),
                    status: self.format_status(outcome),
                }
            })
            .collect();

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &RunReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Root Directory".to_string(),
            value: report.root.clone(),
        });

        rows.push(SummaryRow {
            key: "🔎 Entries Scanned".to_string(),
            value: report.entries_scanned.to_string(),
        });

        rows.push(SummaryRow {
            key: "📝 Renames Planned".to_string(),
            value: report.renames_planned.to_string(),
        });

        if report.applied {
            rows.push(SummaryRow {
                key: "✓ Renamed".to_string(),
                value: report.renamed.to_string(),
            });

            rows.push(SummaryRow {
                key: "✗ Failed".to_string(),
                value: report.failed.to_string(),
            });
        }

        if let Some(links) = report.links_rewritten {
            let key = if report.applied {
                "🔗 Files With Links Rewritten"
            } else {
                "🔗 Files With Links To Rewrite"
            };
            rows.push(SummaryRow {
                key: key.to_string(),
                value: links.to_string(),
            });
        }

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &RunReport) -> String {
        let summary_table = self.create_summary_table(report);

        let summary_title = if report.applied {
            "✅  RENAME COMPLETE"
        } else {
            "🧪  DRY RUN — NO CHANGES MADE"
        };

        if report.outcomes.is_empty() {
            return format!(
                "Nothing to rename: no identifier suffixes found.\n\n{}\n{}",
                summary_title, summary_table
            );
        }

        let entries_title = if report.applied {
            "📋  PROCESSED ENTRIES"
        } else {
            "📋  PLANNED RENAMES"
        };
        let entries_table = self.create_entries_table(report);

        format!(
            "{}\n{}\n\n{}\n{}",
            entries_title, entries_table, summary_title, summary_table
        )
    }
}
