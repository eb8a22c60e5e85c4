//! frontmatter-seo - frontmatter repair and SEO audit for Markdown content
//!
//! The library reads `.mdx` documents whose YAML frontmatter sits between
//! `---` delimiter lines, repairs headers that repeat top-level keys,
//! serializes headers back losslessly, and checks titles and excerpts
//! against SEO length bands. The same operations back the batch CLI and
//! the local-only admin HTTP API.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod operations;
pub mod seo;
pub mod server;
