/*!
 * Command-line interface for deguid
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use deguid::config::{Args, Config};
use deguid::executor::Executor;
use deguid::planner::Planner;
use deguid::report::{Reporter, RunReport};
use deguid::types::EntryStatus;
use deguid::utils::count_entries;

fn main() -> deguid::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration; a bad root is fatal
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("🧭 Planning");
    progress.set_message(format!(
        "Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count entries for progress tracking
    match count_entries(&config.target_dir, &config) {
        Ok(count) => progress.set_length(count),
        Err(e) => progress.set_message(format!("⚠️ Warning: failed to count entries: {}", e)),
    }

    let start_time = Instant::now();

    // Compute the full plan before touching anything
    let planner = Planner::new(config.clone(), Arc::new(progress.clone()))?;
    let plan = planner.plan()?;

    progress.set_prefix(if config.apply {
        "🔧 Renaming"
    } else {
        "🧪 Previewing"
    });
    progress.set_length(plan.renames.len() as u64);
    progress.set_position(0);

    let executor = Executor::new(config.clone(), Arc::new(progress.clone()));

    // Link rewriting runs before the renames, while paths are still original
    let links_rewritten = config
        .rewrite_links
        .then(|| executor.rewrite_links(&plan));

    let outcomes = if config.apply {
        executor.execute(&plan)
    } else {
        executor.preview(&plan)
    };

    let duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    let renamed = outcomes
        .iter()
        .filter(|o| o.status == EntryStatus::Renamed)
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o.status, EntryStatus::Failed | EntryStatus::TargetExists))
        .count();

    // Prepare the run report
    let run_report = RunReport {
        root: config.target_dir.display().to_string(),
        applied: config.apply,
        duration,
        entries_scanned: plan.entries_scanned,
        renames_planned: plan.renames.len(),
        renamed,
        failed,
        links_rewritten,
        outcomes,
    };

    // Create a reporter and print the report. Per-entry failures are listed
    // in the report but do not change the exit status.
    let reporter = Reporter::new(config.format);
    reporter.print_report(&run_report);

    Ok(())
}
