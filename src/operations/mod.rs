//! High-level operations over a content root
//!
//! Each operation re-reads documents from disk; nothing is cached between
//! calls. They are shared by the batch CLI and the admin API:
//! - AuditOperation: SEO listing over every document
//! - ShowOperation: load one document, repairing duplicate keys in memory
//! - SaveOperation: replace one document's header and body
//! - FixDuplicatesOperation: rewrite documents with repeated keys
//! - ApplyOperation: rewrite titles and excerpts from a fix mapping

pub mod apply;
pub mod audit;
pub mod fix_duplicates;
pub mod save;
pub mod show;

pub use apply::{ApplyOperation, ApplyOutcome, ApplySummary, LengthWarning};
pub use audit::{AuditEntry, AuditOperation, AuditReport, AuditSummary, analyze_document};
pub use fix_duplicates::{
    FixDuplicatesOperation, FixDuplicatesOptions, RepairOutcome, RepairSummary,
};
pub use save::SaveOperation;
pub use show::{DocumentView, ShowOperation};
