//! Fix-duplicates operation: rewrite documents whose headers repeat keys
//!
//! Each file is handled on its own. A file that cannot be read, repaired,
//! or written is recorded as failed and the run moves on to the next one.

use tracing::{debug, info, warn};

use crate::content::{ContentDir, ContentFile, ContentRoot};
use crate::error::{FrontmatterError, Result};
use crate::frontmatter;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// No duplicate keys.
    Clean,
    /// Duplicates removed and the file rewritten.
    Repaired { dropped: Vec<String> },
    /// Duplicates found; nothing written because of a dry run.
    WouldRepair { dropped: Vec<String> },
    Failed { reason: String },
}

impl RepairOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RepairOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub fixed: usize,
    pub clean: usize,
    pub failed: usize,
}

impl RepairSummary {
    pub fn total(&self) -> usize {
        self.fixed + self.clean + self.failed
    }

    fn record(&mut self, outcome: &RepairOutcome) {
        match outcome {
            RepairOutcome::Clean => self.clean += 1,
            RepairOutcome::Repaired { .. } | RepairOutcome::WouldRepair { .. } => self.fixed += 1,
            RepairOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// `BatchFailed` when any file failed.
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

#[derive(Debug, Clone)]
pub struct FixDuplicatesOptions {
    pub dirs: Vec<ContentDir>,
    pub dry_run: bool,
}

impl Default for FixDuplicatesOptions {
    fn default() -> Self {
        Self {
            dirs: vec![ContentDir::Recipes],
            dry_run: false,
        }
    }
}

pub struct FixDuplicatesOperation<'a> {
    root: &'a ContentRoot,
    options: FixDuplicatesOptions,
}

impl<'a> FixDuplicatesOperation<'a> {
    pub fn new(root: &'a ContentRoot, options: FixDuplicatesOptions) -> Self {
        Self { root, options }
    }

    /// Files the run will visit, in processing order.
    pub fn files(&self) -> Result<Vec<ContentFile>> {
        self.root.list(&self.options.dirs)
    }

    /// Process every file, calling `observer` after each one.
    pub fn execute<F>(&self, files: &[ContentFile], mut observer: F) -> RepairSummary
    where
        F: FnMut(&ContentFile, &RepairOutcome),
    {
        let mut summary = RepairSummary::default();
        for file in files {
            let outcome = self.fix_file(file).unwrap_or_else(|err| {
                warn!(path = %file.relative_path(), error = %err, "failed to repair document");
                RepairOutcome::Failed {
                    reason: err.to_string(),
                }
            });
            summary.record(&outcome);
            observer(file, &outcome);
        }
        info!(
            fixed = summary.fixed,
            clean = summary.clean,
            failed = summary.failed,
            "duplicate key repair finished"
        );
        summary
    }

    fn fix_file(&self, file: &ContentFile) -> Result<RepairOutcome> {
        let text = self.root.read(file)?;
        let recovered = frontmatter::parse_or_repair(&text)?;
        if !recovered.was_repaired() {
            debug!(path = %file.relative_path(), "no duplicate keys");
            return Ok(RepairOutcome::Clean);
        }

        let dropped = recovered.dropped_keys;
        let document = recovered.document;
        let rewritten = frontmatter::serialize(&document.header, &document.body)?;

        // The rewritten text must come back clean before it replaces the file.
        let reparsed = frontmatter::parse(&rewritten)?;
        if reparsed != document {
            return Err(FrontmatterError::SerializationFailed {
                key: dropped.join(", "),
                reason: "rewritten header does not read back to the repaired values".to_string(),
            });
        }

        if self.options.dry_run {
            return Ok(RepairOutcome::WouldRepair { dropped });
        }
        self.root.write(file, &rewritten)?;
        info!(path = %file.relative_path(), keys = ?dropped, "rewrote document");
        Ok(RepairOutcome::Repaired { dropped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, ContentRoot) {
        let temp = TempDir::new().unwrap();
        for (rel, text) in files {
            let path = temp.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, text).unwrap();
        }
        let root = ContentRoot::new(temp.path());
        (temp, root)
    }

    fn run(root: &ContentRoot, options: FixDuplicatesOptions) -> (RepairSummary, Vec<RepairOutcome>) {
        let op = FixDuplicatesOperation::new(root, options);
        let files = op.files().unwrap();
        let mut outcomes = Vec::new();
        let summary = op.execute(&files, |_, outcome| outcomes.push(outcome.clone()));
        (summary, outcomes)
    }

    #[test]
    fn test_repairs_in_place() {
        let (temp, root) = setup(&[
            (
                "recipes/cake.mdx",
                "---\ntitle: First\nsteps:\n  - mix\ntitle: Second\n---\n\n# Cake\n",
            ),
            ("recipes/clean.mdx", "---\ntitle: Fine\n---\n"),
        ]);
        let (summary, outcomes) = run(&root, FixDuplicatesOptions::default());
        assert_eq!(summary, RepairSummary { fixed: 1, clean: 1, failed: 0 });
        assert_eq!(
            outcomes[0],
            RepairOutcome::Repaired {
                dropped: vec!["title".to_string()]
            }
        );

        let text = std::fs::read_to_string(temp.path().join("recipes/cake.mdx")).unwrap();
        assert!(frontmatter::find_duplicate_keys(&text).is_empty());
        let doc = frontmatter::parse(&text).unwrap();
        assert_eq!(doc.title().as_deref(), Some("First"));
        assert_eq!(doc.body, "\n\n# Cake\n");
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() {
        let original = "---\ntitle: A\ntitle: B\n---\n";
        let (temp, root) = setup(&[("recipes/dup.mdx", original)]);
        let options = FixDuplicatesOptions {
            dry_run: true,
            ..FixDuplicatesOptions::default()
        };
        let (summary, outcomes) = run(&root, options);
        assert_eq!(summary.fixed, 1);
        assert!(matches!(outcomes[0], RepairOutcome::WouldRepair { .. }));
        let text = std::fs::read_to_string(temp.path().join("recipes/dup.mdx")).unwrap();
        assert_eq!(text, original);
    }

    #[test]
    fn test_failures_do_not_abort() {
        let (_temp, root) = setup(&[
            ("recipes/a-broken.mdx", "no header here"),
            ("recipes/b-dup.mdx", "---\nslug: b\nslug: c\n---\n"),
        ]);
        let (summary, outcomes) = run(&root, FixDuplicatesOptions::default());
        assert!(outcomes[0].is_failure());
        assert!(matches!(outcomes[1], RepairOutcome::Repaired { .. }));
        assert_eq!(summary, RepairSummary { fixed: 1, clean: 0, failed: 1 });
        let err = summary.into_result().unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn test_default_scope_is_recipes() {
        let (_temp, root) = setup(&[
            ("recipes/r.mdx", "---\ntitle: R\n---\n"),
            ("posts/p.mdx", "---\ntitle: P\ntitle: Q\n---\n"),
        ]);
        let (summary, _) = run(&root, FixDuplicatesOptions::default());
        assert_eq!(summary.total(), 1);

        let all = FixDuplicatesOptions {
            dirs: ContentDir::ALL.to_vec(),
            dry_run: true,
        };
        let (summary, _) = run(&root, all);
        assert_eq!(summary, RepairSummary { fixed: 1, clean: 1, failed: 0 });
    }
}
