//! Apply operation: rewrite titles and excerpts from a fix mapping

use tracing::{debug, info, warn};

use crate::config::{FieldFix, FixMap};
use crate::content::ContentRoot;
use crate::error::{FrontmatterError, Result};
use crate::frontmatter::{self, Value};
use crate::seo::{EXCERPT_POLICY, LengthPolicy, TITLE_POLICY};

/// A supplied value whose length falls outside its band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthWarning {
    pub field: &'static str,
    pub length: usize,
    pub min: usize,
    pub max: usize,
}

impl LengthWarning {
    fn check(field: &'static str, value: &str, policy: LengthPolicy) -> Option<Self> {
        let length = value.chars().count();
        (!policy.contains(length)).then_some(LengthWarning {
            field,
            length,
            min: policy.min,
            max: policy.max,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Fields rewritten (or would be, on a dry run).
    Updated {
        path: String,
        changed: Vec<&'static str>,
        warnings: Vec<LengthWarning>,
    },
    /// The document already has the supplied values.
    Unchanged { path: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl ApplySummary {
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.failed
    }

    pub fn into_result(self) -> Result<Self> {
        if self.failed > 0 {
            return Err(FrontmatterError::BatchFailed {
                failed: self.failed,
                total: self.total(),
            });
        }
        Ok(self)
    }
}

pub struct ApplyOperation<'a> {
    root: &'a ContentRoot,
    dry_run: bool,
}

impl<'a> ApplyOperation<'a> {
    pub fn new(root: &'a ContentRoot, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Apply every entry in order. A missing or unreadable document is
    /// recorded as failed and the remaining entries still run.
    pub fn execute<F>(&self, fixes: &FixMap, mut observer: F) -> ApplySummary
    where
        F: FnMut(&str, &ApplyOutcome),
    {
        let mut summary = ApplySummary::default();
        for (slug, fix) in fixes.iter() {
            let outcome = self.apply_one(slug, fix).unwrap_or_else(|err| {
                warn!(slug, error = %err, "failed to apply fix");
                ApplyOutcome::Failed {
                    reason: err.to_string(),
                }
            });
            match &outcome {
                ApplyOutcome::Updated { .. } => summary.updated += 1,
                ApplyOutcome::Unchanged { .. } => summary.unchanged += 1,
                ApplyOutcome::Failed { .. } => summary.failed += 1,
            }
            observer(slug, &outcome);
        }
        info!(
            updated = summary.updated,
            unchanged = summary.unchanged,
            failed = summary.failed,
            "fix mapping applied"
        );
        summary
    }

    fn apply_one(&self, slug: &str, fix: &FieldFix) -> Result<ApplyOutcome> {
        let file = self.root.locate(slug)?;
        let text = self.root.read(&file)?;
        let recovered = frontmatter::parse_or_repair(&text)?;
        let repaired = recovered.was_repaired();
        let mut document = recovered.document;

        let mut changed = Vec::new();
        let mut warnings = Vec::new();
        let fields = [
            ("title", fix.title.as_deref(), TITLE_POLICY),
            ("excerpt", fix.excerpt.as_deref(), EXCERPT_POLICY),
        ];
        for (field, value, policy) in fields {
            let Some(value) = value else { continue };
            warnings.extend(LengthWarning::check(field, value, policy));
            let new_value = Value::text(value);
            if document.header.get(field) != Some(&new_value) {
                document.set(field, new_value);
                changed.push(field);
            }
        }

        let path = file.relative_path();
        if changed.is_empty() && !repaired {
            debug!(path = %path, "already up to date");
            return Ok(ApplyOutcome::Unchanged { path });
        }

        if !self.dry_run {
            let rewritten = document.to_text()?;
            self.root.write(&file, &rewritten)?;
            info!(path = %path, fields = ?changed, "applied fix");
        }
        Ok(ApplyOutcome::Updated {
            path,
            changed,
            warnings,
        })
    }
}
