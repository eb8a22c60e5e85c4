//! SEO findings and the per-document report.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A named SEO condition. Whether it is an issue or a warning is decided by
/// the analyzer, not by the finding itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Finding {
    ParseError,
    AnalysisError,
    MissingTitle,
    MissingExcerpt,
    MissingSlug,
    MissingCategory,
    MissingPublishedAt,
    MissingUpdatedAt,
    TitleTooShort,
    TitleTooLong,
    TitleNearLimit,
    ExcerptTooShort,
    ExcerptTooLong,
    ExcerptNearLimit,
    MissingTags,
    MissingHeroImage,
    MissingAuthor,
}

impl Finding {
    pub fn as_str(self) -> &'static str {
        match self {
            Finding::ParseError => "parse-error",
            Finding::AnalysisError => "analysis-error",
            Finding::MissingTitle => "missing-title",
            Finding::MissingExcerpt => "missing-excerpt",
            Finding::MissingSlug => "missing-slug",
            Finding::MissingCategory => "missing-category",
            Finding::MissingPublishedAt => "missing-published-at",
            Finding::MissingUpdatedAt => "missing-updated-at",
            Finding::TitleTooShort => "title-too-short",
            Finding::TitleTooLong => "title-too-long",
            Finding::TitleNearLimit => "title-near-limit",
            Finding::ExcerptTooShort => "excerpt-too-short",
            Finding::ExcerptTooLong => "excerpt-too-long",
            Finding::ExcerptNearLimit => "excerpt-near-limit",
            Finding::MissingTags => "missing-tags",
            Finding::MissingHeroImage => "missing-hero-image",
            Finding::MissingAuthor => "missing-author",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived SEO view over one document header. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub title_length: usize,
    pub excerpt_length: usize,
    /// Hard failures.
    pub issues: BTreeSet<Finding>,
    /// Soft signals.
    pub warnings: BTreeSet<Finding>,
}

impl SeoReport {
    /// Report used when analysis itself failed.
    pub fn degraded() -> Self {
        Self::single_issue(Finding::AnalysisError)
    }

    /// Report used by listings for documents that could not be parsed.
    pub fn parse_error() -> Self {
        Self::single_issue(Finding::ParseError)
    }

    fn single_issue(finding: Finding) -> Self {
        SeoReport {
            issues: BTreeSet::from([finding]),
            ..SeoReport::default()
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn issue_names(&self) -> Vec<&'static str> {
        self.issues.iter().map(|f| f.as_str()).collect()
    }

    pub fn warning_names(&self) -> Vec<&'static str> {
        self.warnings.iter().map(|f| f.as_str()).collect()
    }
}
