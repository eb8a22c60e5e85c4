//! Frontmatter document errors

use super::FrontmatterError;

/// Creates a malformed document error
pub fn malformed(reason: impl Into<String>) -> FrontmatterError {
    FrontmatterError::MalformedDocument {
        reason: reason.into(),
    }
}

/// Creates a duplicate key error
pub fn duplicate_key(key: impl Into<String>) -> FrontmatterError {
    FrontmatterError::DuplicateKey { key: key.into() }
}

/// Creates an invalid header error
pub fn invalid_header(reason: impl Into<String>) -> FrontmatterError {
    FrontmatterError::InvalidHeader {
        reason: reason.into(),
    }
}

/// Creates a serialization error for one header key
pub fn serialization_failed(key: impl Into<String>, reason: impl Into<String>) -> FrontmatterError {
    FrontmatterError::SerializationFailed {
        key: key.into(),
        reason: reason.into(),
    }
}
