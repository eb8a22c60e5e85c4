//! Command helper utilities

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::config::Settings;
use frontmatter_seo::content::ContentRoot;
use frontmatter_seo::error::Result;
use frontmatter_seo::seo::SeoReport;

/// Open the content root given on the command line.
pub fn open_content_root(content_root: PathBuf) -> Result<ContentRoot> {
    Settings::new(content_root).open_content_root()
}

/// Print an SEO report's findings, one per line, under `indent`.
pub fn print_findings(report: &SeoReport, indent: &str) {
    let issue = Style::new().red();
    let warning = Style::new().yellow();
    for name in report.issue_names() {
        println!("{indent}{} {name}", issue.apply_to("issue:"));
    }
    for name in report.warning_names() {
        println!("{indent}{} {name}", warning.apply_to("warning:"));
    }
}

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| frontmatter_seo::error::io_error(format!("cannot render JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
