use clap::Parser;

/// Arguments for the fix-duplicates command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Repair recipes in place:\n    frontmatter-seo fix-duplicates\n\n\
                  Check every directory without writing:\n    frontmatter-seo fix-duplicates --all --dry-run")]
pub struct FixDuplicatesArgs {
    /// Scan articles/ and posts/ as well as recipes/
    #[arg(long)]
    pub all: bool,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}
