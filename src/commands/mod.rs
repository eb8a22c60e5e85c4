//! Command implementations for the frontmatter-seo CLI

pub mod apply;
pub mod audit;
pub mod completions;
pub mod fix_duplicates;
mod helpers;
pub mod serve;
pub mod show;
pub mod version;
