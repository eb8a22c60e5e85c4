use clap::Parser;

/// Arguments for the audit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Audit every document:\n    frontmatter-seo audit\n\n\
                  Only documents with issues:\n    frontmatter-seo audit --issues-only\n\n\
                  Machine-readable listing:\n    frontmatter-seo audit --json")]
pub struct AuditArgs {
    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Only list documents that have issues (the summary still counts every document)
    #[arg(long)]
    pub issues_only: bool,
}
