//! Error types and handling for frontmatter-seo
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`document`]: Frontmatter parsing and serialization errors
//! - [`content`]: Content directory lookup errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`server`]: Admin API errors

pub mod config;
pub mod content;
pub mod document;
pub mod fs;
pub mod server;

pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
};
pub use content::{invalid_slug, not_found as document_not_found};
pub use document::{duplicate_key, invalid_header, malformed, serialization_failed};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use server::{invalid_request, server_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for frontmatter operations
#[derive(Error, Diagnostic, Debug)]
pub enum FrontmatterError {
    // Document errors
    #[error("Malformed document: {reason}")]
    #[diagnostic(
        code(frontmatter_seo::document::malformed),
        help("Documents must start with a '---' line and close the header with another '---' line")
    )]
    MalformedDocument { reason: String },

    #[error("Duplicate frontmatter key '{key}'")]
    #[diagnostic(
        code(frontmatter_seo::document::duplicate_key),
        help("Run 'frontmatter-seo fix-duplicates' to keep the first occurrence of each key")
    )]
    DuplicateKey { key: String },

    #[error("Invalid frontmatter header: {reason}")]
    #[diagnostic(code(frontmatter_seo::document::invalid_header))]
    InvalidHeader { reason: String },

    #[error("Cannot serialize frontmatter key '{key}': {reason}")]
    #[diagnostic(code(frontmatter_seo::document::serialization_failed))]
    SerializationFailed { key: String, reason: String },

    #[error("SEO analysis failed on '{field}': {reason}")]
    #[diagnostic(code(frontmatter_seo::seo::analysis_failed))]
    AnalysisFailed { field: String, reason: String },

    // Content errors
    #[error("Document '{slug}' not found")]
    #[diagnostic(
        code(frontmatter_seo::content::not_found),
        help("Documents are looked up as <slug>.mdx under recipes/, articles/ and posts/")
    )]
    DocumentNotFound { slug: String },

    #[error("Invalid slug: {slug}")]
    #[diagnostic(
        code(frontmatter_seo::content::invalid_slug),
        help("Slugs are file names without extension and may not contain path separators")
    )]
    InvalidSlug { slug: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(frontmatter_seo::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(frontmatter_seo::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(frontmatter_seo::config::invalid))]
    ConfigInvalid { message: String },

    // Admin API errors
    #[error("Admin API is only available on localhost")]
    #[diagnostic(code(frontmatter_seo::server::access_denied))]
    AccessDenied,

    #[error("Invalid request: {message}")]
    #[diagnostic(code(frontmatter_seo::server::invalid_request))]
    InvalidRequest { message: String },

    #[error("Admin server failed: {message}")]
    #[diagnostic(code(frontmatter_seo::server::failed))]
    ServerFailed { message: String },

    // Batch errors
    #[error("{failed} of {total} documents failed")]
    #[diagnostic(
        code(frontmatter_seo::batch::failed),
        help("Re-run with --verbose to see why each document failed")
    )]
    BatchFailed { failed: usize, total: usize },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(frontmatter_seo::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(frontmatter_seo::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(frontmatter_seo::fs::io_error))]
    IoError { message: String },
}

impl FrontmatterError {
    /// True for errors that describe the content of a single document,
    /// as opposed to I/O or configuration failures.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            FrontmatterError::MalformedDocument { .. }
                | FrontmatterError::DuplicateKey { .. }
                | FrontmatterError::InvalidHeader { .. }
        )
    }
}

impl From<std::io::Error> for FrontmatterError {
    fn from(err: std::io::Error) -> Self {
        FrontmatterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FrontmatterError {
    fn from(err: serde_yaml::Error) -> Self {
        FrontmatterError::InvalidHeader {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FrontmatterError {
    fn from(err: serde_json::Error) -> Self {
        FrontmatterError::InvalidRequest {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FrontmatterError>;
