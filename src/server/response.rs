//! JSON error responses for the admin API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::FrontmatterError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A crate error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError {
    error: FrontmatterError,
    /// Include the debug rendering of the error in the body.
    dev_mode: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn new(error: FrontmatterError, dev_mode: bool) -> Self {
        Self { error, dev_mode }
    }

    pub fn status(&self) -> StatusCode {
        status_for(&self.error)
    }
}

pub fn status_for(error: &FrontmatterError) -> StatusCode {
    match error {
        FrontmatterError::InvalidRequest { .. }
        | FrontmatterError::InvalidSlug { .. }
        | FrontmatterError::SerializationFailed { .. } => StatusCode::BAD_REQUEST,
        FrontmatterError::AccessDenied => StatusCode::FORBIDDEN,
        FrontmatterError::DocumentNotFound { .. } => StatusCode::NOT_FOUND,
        FrontmatterError::MalformedDocument { .. }
        | FrontmatterError::DuplicateKey { .. }
        | FrontmatterError::InvalidHeader { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self.error, "admin request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.error, "admin request rejected");
        }

        let body = ErrorBody {
            error: self.error.to_string(),
            code: self.error.code().map(|code| code.to_string()),
            details: self.dev_mode.then(|| format!("{:?}", self.error)),
        };
        (status, Json(body)).into_response()
    }
}
