use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a document:\n    frontmatter-seo show banana-bread\n\n\
                  Show as JSON:\n    frontmatter-seo show banana-bread --json")]
pub struct ShowArgs {
    /// Document slug (file name without .mdx)
    pub slug: String,

    /// Print the document and report as JSON
    #[arg(long)]
    pub json: bool,
}
