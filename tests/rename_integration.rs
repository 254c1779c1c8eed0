/*!
 * End-to-end test over a realistic export tree
 */

use std::fs::{self, File};
use std::io::Write;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use deguid::{Config, EntryStatus, Executor, Planner, ReportFormat};

const TOKEN_A: &str = "3a1b54c8e2f64d7a9b0c1d2e3f405162";
const TOKEN_B: &str = "7788990011aabbccddeeff0011223344";
const TOKEN_C: &str = "5566778899aabbccddeeff0011223355";

fn export_config(root: &std::path::Path, apply: bool) -> Config {
    Config {
        target_dir: root.to_path_buf(),
        apply,
        rewrite_links: true,
        token_length: 32,
        ignore_patterns: vec![],
        include_patterns: vec![],
        format: ReportFormat::ConsoleTable,
    }
}

#[test]
fn test_full_export_cleanup() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    // Tree shaped like a typical export: nested suffixed directories, pages
    // with suffixed names, a CSV database and cross-linking markdown.
    let workspace = root.join(format!("Workspace {}", TOKEN_A));
    let projects = workspace.join(format!("Projects {}", TOKEN_B));
    fs::create_dir_all(&projects).unwrap();

    let mut page = File::create(projects.join(format!("Roadmap {}.md", TOKEN_C))).unwrap();
    writeln!(page, "# Roadmap").unwrap();
    writeln!(page, "Back to [Projects](../Projects%20{}.csv)", TOKEN_B).unwrap();
    drop(page);

    let mut csv = File::create(workspace.join(format!("Projects {}.csv", TOKEN_B))).unwrap();
    writeln!(csv, "Name,Link").unwrap();
    writeln!(
        csv,
        "Roadmap,Projects%20{}/Roadmap%20{}.md",
        TOKEN_B, TOKEN_C
    )
    .unwrap();
    drop(csv);

    // Dry run first: same plan, nothing moved
    let dry_config = export_config(root, false);
    let dry_plan = Planner::new(dry_config.clone(), Arc::new(ProgressBar::hidden()))
        .unwrap()
        .plan()
        .unwrap();
    assert_eq!(dry_plan.renames.len(), 4);
    assert!(workspace.exists());

    // Apply
    let config = export_config(root, true);
    let planner = Planner::new(config.clone(), Arc::new(ProgressBar::hidden())).unwrap();
    let plan = planner.plan().unwrap();

    let dry_targets: Vec<_> = dry_plan.renames.iter().map(|r| r.target_name()).collect();
    let apply_targets: Vec<_> = plan.renames.iter().map(|r| r.target_name()).collect();
    assert_eq!(dry_targets, apply_targets);

    let executor = Executor::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let rewritten = executor.rewrite_links(&plan);
    let outcomes = executor.execute(&plan);

    assert_eq!(rewritten, 2);
    assert!(outcomes.iter().all(|o| o.status == EntryStatus::Renamed));

    // The cleaned tree
    let roadmap = root.join("Workspace").join("Projects").join("Roadmap.md");
    assert!(roadmap.exists());
    assert!(root.join("Workspace").join("Projects.csv").exists());

    // Links were rewritten consistently with the renames
    let page_content = fs::read_to_string(&roadmap).unwrap();
    assert!(page_content.contains("[Projects](../Projects.csv)"));
    let csv_content =
        fs::read_to_string(root.join("Workspace").join("Projects.csv")).unwrap();
    assert!(csv_content.contains("Roadmap,Projects/Roadmap.md"));

    // A second pass over the cleaned tree finds nothing
    let second_plan = Planner::new(config, Arc::new(ProgressBar::hidden()))
        .unwrap()
        .plan()
        .unwrap();
    assert!(second_plan.renames.is_empty());
}
