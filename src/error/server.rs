//! Admin API errors

use super::FrontmatterError;

/// Creates an invalid request error
pub fn invalid_request(message: impl Into<String>) -> FrontmatterError {
    FrontmatterError::InvalidRequest {
        message: message.into(),
    }
}

/// Creates a server failure error
pub fn server_failed(message: impl Into<String>) -> FrontmatterError {
    FrontmatterError::ServerFailed {
        message: message.into(),
    }
}
