//! Audit command implementation
//!
//! Lists every document with its title and excerpt lengths and SEO findings.

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::error::Result;
use frontmatter_seo::operations::{AuditEntry, AuditOperation, AuditReport};

use super::helpers::{open_content_root, print_findings, print_json};
use crate::cli::AuditArgs;

/// Run audit command
pub fn run(content_root: PathBuf, args: AuditArgs) -> Result<()> {
    let root = open_content_root(content_root)?;
    let mut report = AuditOperation::new(&root).execute()?;

    if args.issues_only {
        report.documents.retain(|entry| entry.has_issues);
    }

    if args.json {
        return print_json(&report);
    }
    display_report(&report);
    Ok(())
}

fn display_report(report: &AuditReport) {
    if report.documents.is_empty() {
        println!("No documents to report.");
    } else {
        for entry in &report.documents {
            display_entry(entry);
        }
        println!();
    }

    let summary = &report.summary;
    println!(
        "{} {} documents, {} perfect, {} with issues, {} with warnings",
        Style::new().bold().apply_to("Summary:"),
        summary.total,
        Style::new().green().apply_to(summary.perfect),
        Style::new().red().apply_to(summary.with_issues),
        Style::new().yellow().apply_to(summary.with_warnings),
    );
}

fn display_entry(entry: &AuditEntry) {
    let marker = if entry.has_issues {
        Style::new().red().bold().apply_to("✗")
    } else if entry.has_warnings {
        Style::new().yellow().bold().apply_to("!")
    } else {
        Style::new().green().bold().apply_to("✓")
    };
    println!(
        "{marker} {} {}",
        Style::new().bold().apply_to(&entry.path),
        Style::new().dim().apply_to(format!(
            "(title {}, excerpt {})",
            entry.report.title_length, entry.report.excerpt_length
        )),
    );
    if let Some(ref error) = entry.error {
        println!("    {} {error}", Style::new().red().apply_to("error:"));
    }
    print_findings(&entry.report, "    ");
}
