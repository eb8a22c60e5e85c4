//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - audit: Audit command arguments
//! - show: Show command arguments
//! - fix_duplicates: Fix-duplicates command arguments
//! - apply: Apply command arguments
//! - serve: Serve command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod audit;
pub mod completions;
pub mod fix_duplicates;
pub mod serve;
pub mod show;

pub use apply::ApplyArgs;
pub use audit::AuditArgs;
pub use completions::CompletionsArgs;
pub use fix_duplicates::FixDuplicatesArgs;
pub use serve::ServeArgs;
pub use show::ShowArgs;

use frontmatter_seo::config::DEFAULT_CONTENT_ROOT;

/// frontmatter-seo - frontmatter repair and SEO audit
///
/// Audit, repair and edit the YAML frontmatter of Markdown content files.
#[derive(Parser, Debug)]
#[command(
    name = "frontmatter-seo",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Frontmatter repair and SEO audit for Markdown content",
    long_about = "frontmatter-seo reads the YAML frontmatter of .mdx documents under recipes/, \
                  articles/ and posts/, reports SEO problems with titles and excerpts, repairs \
                  headers with repeated keys, and serves a local-only admin API for editing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  frontmatter-seo audit --issues-only          \x1b[90m# Documents with SEO issues\x1b[0m\n   \
                  frontmatter-seo show banana-bread            \x1b[90m# One document and its report\x1b[0m\n   \
                  frontmatter-seo fix-duplicates --dry-run     \x1b[90m# Find repeated keys in recipes\x1b[0m\n   \
                  frontmatter-seo apply titles.yaml            \x1b[90m# Rewrite titles from a mapping\x1b[0m\n   \
                  frontmatter-seo serve                        \x1b[90m# Admin API on 127.0.0.1:4321\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Content root holding recipes/, articles/ and posts/
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "FRONTMATTER_SEO_CONTENT_ROOT",
        default_value = DEFAULT_CONTENT_ROOT
    )]
    pub content_root: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report SEO issues and warnings for every document
    Audit(AuditArgs),

    /// Show one document's frontmatter and SEO report
    Show(ShowArgs),

    /// Repair frontmatter with repeated top-level keys
    FixDuplicates(FixDuplicatesArgs),

    /// Rewrite titles and excerpts from a slug mapping
    Apply(ApplyArgs),

    /// Run the local-only admin API
    Serve(ServeArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
