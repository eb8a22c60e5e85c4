//! SEO analysis of frontmatter headers
//!
//! Checks required fields, title and excerpt length bands, and optional
//! enrichment fields. See [`analyze`].

mod analyzer;
mod report;

pub use analyzer::{
    EXCERPT_POLICY, LengthPolicy, LengthVerdict, REQUIRED_FIELDS, TITLE_POLICY, analyze,
};
pub use report::{Finding, SeoReport};
