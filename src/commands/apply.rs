//! Apply command implementation

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::config::FixMap;
use frontmatter_seo::error::Result;
use frontmatter_seo::operations::{ApplyOperation, ApplyOutcome};

use super::helpers::open_content_root;
use crate::cli::ApplyArgs;
use crate::progress::BatchProgress;

/// Run apply command
pub fn run(content_root: PathBuf, args: ApplyArgs) -> Result<()> {
    let root = open_content_root(content_root)?;
    let fixes = FixMap::load(&args.mapping)?;
    if fixes.is_empty() {
        println!("Mapping is empty, nothing to apply.");
        return Ok(());
    }

    let progress = BatchProgress::new(fixes.len() as u64);
    let summary = ApplyOperation::new(&root, args.dry_run).execute(&fixes, |slug, outcome| {
        for line in describe(slug, outcome) {
            progress.println(line);
        }
        progress.advance(slug);
    });
    progress.finish();

    let updated_label = if args.dry_run { "to update" } else { "updated" };
    println!();
    println!(
        "{} {} {updated_label}, {} unchanged, {} failed",
        Style::new().bold().apply_to("Summary:"),
        summary.updated,
        summary.unchanged,
        summary.failed
    );
    summary.into_result().map(|_| ())
}

fn describe(slug: &str, outcome: &ApplyOutcome) -> Vec<String> {
    match outcome {
        ApplyOutcome::Updated {
            path,
            changed,
            warnings,
        } => {
            let fields = if changed.is_empty() {
                "header normalized".to_string()
            } else {
                changed.join(", ")
            };
            let mut lines = vec![format!(
                "{} {path} ({fields})",
                Style::new().cyan().apply_to("updated  ")
            )];
            lines.extend(warnings.iter().map(|w| {
                format!(
                    "  {} {} is {} chars, outside {}-{}",
                    Style::new().yellow().apply_to("warning:"),
                    w.field,
                    w.length,
                    w.min,
                    w.max
                )
            }));
            lines
        }
        ApplyOutcome::Unchanged { path } => {
            vec![format!("{} {path}", Style::new().green().apply_to("unchanged"))]
        }
        ApplyOutcome::Failed { reason } => {
            vec![format!("{} {slug}: {reason}", Style::new().red().apply_to("failed   "))]
        }
    }
}
