//! Content directory errors

use super::FrontmatterError;

/// Creates a document not found error
pub fn not_found(slug: impl Into<String>) -> FrontmatterError {
    FrontmatterError::DocumentNotFound { slug: slug.into() }
}

/// Creates an invalid slug error
pub fn invalid_slug(slug: impl Into<String>) -> FrontmatterError {
    FrontmatterError::InvalidSlug { slug: slug.into() }
}
