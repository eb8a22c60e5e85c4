//! Fix-duplicates command implementation

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::content::ContentDir;
use frontmatter_seo::error::Result;
use frontmatter_seo::operations::{
    FixDuplicatesOperation, FixDuplicatesOptions, RepairOutcome, RepairSummary,
};

use super::helpers::open_content_root;
use crate::cli::FixDuplicatesArgs;
use crate::progress::BatchProgress;

/// Run fix-duplicates command
pub fn run(content_root: PathBuf, args: FixDuplicatesArgs) -> Result<()> {
    let root = open_content_root(content_root)?;
    let dirs = if args.all {
        ContentDir::ALL.to_vec()
    } else {
        vec![ContentDir::Recipes]
    };
    let operation = FixDuplicatesOperation::new(
        &root,
        FixDuplicatesOptions {
            dirs,
            dry_run: args.dry_run,
        },
    );

    let files = operation.files()?;
    let progress = BatchProgress::new(files.len() as u64);
    let summary = operation.execute(&files, |file, outcome| {
        let path = file.relative_path();
        progress.println(describe(&path, outcome));
        progress.advance(&path);
    });
    progress.finish();

    display_summary(&summary, args.dry_run);
    summary.into_result().map(|_| ())
}

fn describe(path: &str, outcome: &RepairOutcome) -> String {
    match outcome {
        RepairOutcome::Clean => format!("{} {path}", Style::new().green().apply_to("clean   ")),
        RepairOutcome::Repaired { dropped } => format!(
            "{} {path} (dropped repeated: {})",
            Style::new().cyan().apply_to("fixed   "),
            dropped.join(", ")
        ),
        RepairOutcome::WouldRepair { dropped } => format!(
            "{} {path} (repeated: {})",
            Style::new().yellow().apply_to("would fix"),
            dropped.join(", ")
        ),
        RepairOutcome::Failed { reason } => {
            format!("{} {path}: {reason}", Style::new().red().apply_to("failed  "))
        }
    }
}

fn display_summary(summary: &RepairSummary, dry_run: bool) {
    let fixed_label = if dry_run { "to fix" } else { "fixed" };
    println!();
    println!(
        "{} {} {fixed_label}, {} clean, {} failed",
        Style::new().bold().apply_to("Summary:"),
        summary.fixed,
        summary.clean,
        summary.failed
    );
}
