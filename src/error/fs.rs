//! File system errors

use super::FrontmatterError;

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FrontmatterError {
    FrontmatterError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> FrontmatterError {
    FrontmatterError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FrontmatterError {
    FrontmatterError::IoError {
        message: message.into(),
    }
}
