use clap::Parser;
use std::path::PathBuf;

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "MAPPING FILE:\n  \
                  banana-bread: \"Moist Banana Bread with Brown Butter and Walnuts\"\n  \
                  lemon-cake:\n    \
                  title: \"Lemon Drizzle Cake with a Crackly Sugar Glaze\"\n    \
                  excerpt: \"...\"\n\n\
                  EXAMPLES:\n  \
                  Preview changes:\n    frontmatter-seo apply titles.yaml --dry-run")]
pub struct ApplyArgs {
    /// YAML file mapping slugs to titles or {title, excerpt}
    pub mapping: PathBuf,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}
