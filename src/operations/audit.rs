//! Audit operation: SEO listing over every content document

use serde::Serialize;
use tracing::{debug, warn};

use crate::content::{ContentDir, ContentFile, ContentRoot};
use crate::error::Result;
use crate::frontmatter::{self, Document};
use crate::seo::{self, SeoReport};

/// One row of the SEO listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub slug: String,
    pub path: String,
    pub directory: ContentDir,
    pub title: String,
    #[serde(flatten)]
    pub report: SeoReport,
    pub issue_count: usize,
    pub warning_count: usize,
    pub has_issues: bool,
    pub has_warnings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    fn new(file: &ContentFile, title: String, report: SeoReport, error: Option<String>) -> Self {
        AuditEntry {
            slug: file.slug.clone(),
            path: file.relative_path(),
            directory: file.directory,
            title,
            issue_count: report.issues.len(),
            warning_count: report.warnings.len(),
            has_issues: report.has_issues(),
            has_warnings: report.has_warnings(),
            report,
            error,
        }
    }

    pub fn is_perfect(&self) -> bool {
        !self.has_issues
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total: usize,
    /// Documents without issues; warnings are allowed.
    pub perfect: usize,
    pub with_issues: usize,
    pub with_warnings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub documents: Vec<AuditEntry>,
    pub summary: AuditSummary,
}

impl AuditReport {
    fn from_entries(documents: Vec<AuditEntry>) -> Self {
        let summary = AuditSummary {
            total: documents.len(),
            perfect: documents.iter().filter(|e| e.is_perfect()).count(),
            with_issues: documents.iter().filter(|e| e.has_issues).count(),
            with_warnings: documents.iter().filter(|e| e.has_warnings).count(),
        };
        AuditReport { documents, summary }
    }
}

/// Builds the SEO listing for a content root.
pub struct AuditOperation<'a> {
    root: &'a ContentRoot,
}

impl<'a> AuditOperation<'a> {
    pub fn new(root: &'a ContentRoot) -> Self {
        Self { root }
    }

    /// Analyze every document. A document that fails to parse, including one
    /// with duplicate keys, is listed with a `parse-error` issue instead of
    /// aborting the listing.
    pub fn execute(&self) -> Result<AuditReport> {
        let files = self.root.list_all()?;
        let documents = files.iter().map(|file| self.audit_file(file)).collect();
        Ok(AuditReport::from_entries(documents))
    }

    fn audit_file(&self, file: &ContentFile) -> AuditEntry {
        let text = match self.root.read(file) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %file.relative_path(), error = %err, "failed to read document");
                return AuditEntry::new(file, String::new(), SeoReport::parse_error(), Some(err.to_string()));
            }
        };

        match frontmatter::parse(&text) {
            Ok(document) => {
                let report = analyze_document(&document);
                debug!(
                    path = %file.relative_path(),
                    issues = report.issues.len(),
                    warnings = report.warnings.len(),
                    "audited document"
                );
                let title = document.title().unwrap_or_default();
                AuditEntry::new(file, title, report, None)
            }
            Err(err) => {
                warn!(path = %file.relative_path(), error = %err, "failed to parse document");
                AuditEntry::new(file, String::new(), SeoReport::parse_error(), Some(err.to_string()))
            }
        }
    }
}

/// Analyze a parsed document, measuring the body's first heading when the
/// header has no title.
pub fn analyze_document(document: &Document) -> SeoReport {
    seo::analyze(&document.header, document.heading().unwrap_or_default())
}
