//! Version command implementation

use frontmatter_seo::config::DEFAULT_ADDR;
use frontmatter_seo::content::{ContentDir, EXTENSION};
use frontmatter_seo::error::Result;
use frontmatter_seo::seo::{EXCERPT_POLICY, LengthPolicy, TITLE_POLICY};

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

/// Version, build profile and the content conventions this build checks.
fn version_report() -> String {
    let dirs: Vec<&str> = ContentDir::ALL.iter().map(|d| d.as_str()).collect();
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    format!(
        "frontmatter-seo {version} ({profile}, rust {rust})\n\n\
         Content:\n  \
         directories: {dirs}\n  \
         documents: <slug>.{EXTENSION}\n\n\
         SEO bands:\n  \
         title: {title}\n  \
         excerpt: {excerpt}\n\n\
         Admin API default: {DEFAULT_ADDR}\n",
        version = env!("CARGO_PKG_VERSION"),
        rust = env!("CARGO_PKG_RUST_VERSION"),
        dirs = dirs.join(", "),
        title = band(TITLE_POLICY),
        excerpt = band(EXCERPT_POLICY),
    )
}

fn band(policy: LengthPolicy) -> String {
    format!(
        "{}-{} chars (near limit within {})",
        policy.min, policy.max, policy.margin
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_report() {
        let report = version_report();
        assert!(report.starts_with(&format!("frontmatter-seo {}", env!("CARGO_PKG_VERSION"))));
        assert!(report.contains("directories: recipes, articles, posts"));
        assert!(report.contains("documents: <slug>.mdx"));
        assert!(report.contains("title: 50-60 chars"));
        assert!(report.contains("excerpt: 150-160 chars"));
        assert!(report.contains("Admin API default: 127.0.0.1:4321"));
    }
}
