//! SEO compliance checks over a frontmatter header.

use tracing::warn;

use super::report::{Finding, SeoReport};
use crate::error::{FrontmatterError, Result};
use crate::frontmatter::{Mapping, Value};

/// Fields every published document must carry, with the issue raised when
/// one is absent, null, or empty.
pub const REQUIRED_FIELDS: &[(&str, Finding)] = &[
    ("title", Finding::MissingTitle),
    ("excerpt", Finding::MissingExcerpt),
    ("slug", Finding::MissingSlug),
    ("category", Finding::MissingCategory),
    ("publishedAt", Finding::MissingPublishedAt),
    ("updatedAt", Finding::MissingUpdatedAt),
];

/// Hard length band plus the soft margin inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub min: usize,
    pub max: usize,
    pub margin: usize,
}

pub const TITLE_POLICY: LengthPolicy = LengthPolicy {
    min: 50,
    max: 60,
    margin: 2,
};

pub const EXCERPT_POLICY: LengthPolicy = LengthPolicy {
    min: 150,
    max: 160,
    margin: 2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthVerdict {
    /// Nothing to measure.
    Empty,
    TooShort,
    TooLong,
    NearLimit,
    Ok,
}

impl LengthPolicy {
    pub fn check(&self, len: usize) -> LengthVerdict {
        if len == 0 {
            LengthVerdict::Empty
        } else if len < self.min {
            LengthVerdict::TooShort
        } else if len > self.max {
            LengthVerdict::TooLong
        } else if len < self.min + self.margin || len > self.max - self.margin {
            LengthVerdict::NearLimit
        } else {
            LengthVerdict::Ok
        }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Findings raised for one measured field.
struct LengthFindings {
    too_short: Finding,
    too_long: Finding,
    near_limit: Finding,
}

const TITLE_FINDINGS: LengthFindings = LengthFindings {
    too_short: Finding::TitleTooShort,
    too_long: Finding::TitleTooLong,
    near_limit: Finding::TitleNearLimit,
};

const EXCERPT_FINDINGS: LengthFindings = LengthFindings {
    too_short: Finding::ExcerptTooShort,
    too_long: Finding::ExcerptTooLong,
    near_limit: Finding::ExcerptNearLimit,
};

/// Analyze a header. Never fails: internal errors yield
/// [`SeoReport::degraded`] so a scan over many documents keeps going.
///
/// `fallback_title` is measured when the header has no usable title.
pub fn analyze(header: &Mapping, fallback_title: &str) -> SeoReport {
    match try_analyze(header, fallback_title) {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, "SEO analysis failed");
            SeoReport::degraded()
        }
    }
}

fn try_analyze(header: &Mapping, fallback_title: &str) -> Result<SeoReport> {
    let mut report = SeoReport::default();

    for (field, finding) in REQUIRED_FIELDS {
        if header.get(field).is_none_or(Value::is_blank) {
            report.issues.insert(*finding);
        }
    }

    let title = measured_text(header, "title")?
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title.to_string());
    let title_length = title.chars().count();
    report.title_length = title_length;
    apply_length(&mut report, TITLE_POLICY, title_length, &TITLE_FINDINGS);

    let excerpt = measured_text(header, "excerpt")?.unwrap_or_default();
    let excerpt_length = excerpt.chars().count();
    report.excerpt_length = excerpt_length;
    apply_length(&mut report, EXCERPT_POLICY, excerpt_length, &EXCERPT_FINDINGS);

    let has_tags = header.get("tags").is_some_and(|tags| match tags {
        Value::Null => false,
        Value::Sequence(items) => !items.is_empty(),
        other => !other.is_blank(),
    });
    if !has_tags {
        report.warnings.insert(Finding::MissingTags);
    }
    if header.get("heroImage").is_none_or(Value::is_null) {
        report.warnings.insert(Finding::MissingHeroImage);
    }
    if header.get("author").is_none_or(Value::is_blank) {
        report.warnings.insert(Finding::MissingAuthor);
    }

    Ok(report)
}

/// Text of a field that must be a scalar if present.
fn measured_text(header: &Mapping, field: &str) -> Result<Option<String>> {
    match header.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .scalar_text()
            .map(Some)
            .ok_or_else(|| FrontmatterError::AnalysisFailed {
                field: field.to_string(),
                reason: "expected text, found a list or mapping".to_string(),
            }),
    }
}

fn apply_length(
    report: &mut SeoReport,
    policy: LengthPolicy,
    len: usize,
    findings: &LengthFindings,
) {
    match policy.check(len) {
        LengthVerdict::Empty | LengthVerdict::Ok => {}
        LengthVerdict::TooShort => {
            report.issues.insert(findings.too_short);
        }
        LengthVerdict::TooLong => {
            report.issues.insert(findings.too_long);
        }
        LengthVerdict::NearLimit => {
            report.warnings.insert(findings.near_limit);
        }
    }
}
