//! Show command implementation

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::error::Result;
use frontmatter_seo::frontmatter;
use frontmatter_seo::operations::ShowOperation;
use serde_json::json;

use super::helpers::{open_content_root, print_findings, print_json};
use crate::cli::ShowArgs;

/// Run show command
pub fn run(content_root: PathBuf, args: ShowArgs) -> Result<()> {
    let root = open_content_root(content_root)?;
    let view = ShowOperation::new(&root).execute(&args.slug)?;
    let report = view.report();

    if args.json {
        return print_json(&json!({ "document": view, "seo": report }));
    }

    println!("{}", Style::new().bold().yellow().apply_to(&view.path));
    if view.repaired {
        println!(
            "  {} duplicate keys dropped in memory: {}",
            Style::new().yellow().apply_to("note:"),
            view.dropped_keys.join(", ")
        );
    }
    println!();

    let header = frontmatter::serialize(&view.header, "")?;
    print!("{header}");
    println!();

    println!(
        "{} title {} chars, excerpt {} chars",
        Style::new().bold().apply_to("SEO:"),
        report.title_length,
        report.excerpt_length
    );
    if !report.has_issues() && !report.has_warnings() {
        println!("  {}", Style::new().green().apply_to("no issues"));
    }
    print_findings(&report, "  ");
    Ok(())
}
