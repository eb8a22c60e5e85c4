//! Admin API handlers
//!
//! File work runs on the blocking pool, one document per request.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use super::response::{ApiError, ApiResult};
use crate::error::{FrontmatterError, invalid_request, server_failed};
use crate::frontmatter::Value;
use crate::operations::{AuditOperation, AuditReport, DocumentView, SaveOperation, ShowOperation};

/// Body of `PUT /api/admin/content/:slug`.
#[derive(Debug, Deserialize)]
struct SaveRequest {
    frontmatter: serde_json::Value,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub slug: String,
    pub path: String,
}

async fn run_blocking<T, F>(state: &AppState, work: F) -> ApiResult<T>
where
    F: FnOnce() -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let dev_mode = state.dev_mode;
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| server_failed(format!("worker task failed: {e}")))
        .and_then(|result| result)
        .map_err(|err| ApiError::new(err, dev_mode))
}

pub async fn list_documents(State(state): State<AppState>) -> ApiResult<Json<AuditReport>> {
    let root = state.root.clone();
    let report = run_blocking(&state, move || AuditOperation::new(&root).execute()).await?;
    debug!(total = report.summary.total, "listed documents");
    Ok(Json(report))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<DocumentView>> {
    let root = state.root.clone();
    let view = run_blocking(&state, move || ShowOperation::new(&root).execute(&slug)).await?;
    Ok(Json(view))
}

pub async fn put_document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Bytes,
) -> ApiResult<Json<SaveResponse>> {
    let request = parse_save_request(&body).map_err(|err| ApiError::new(err, state.dev_mode))?;
    let header = match Value::from_json(request.frontmatter) {
        Value::Mapping(header) => header,
        _ => {
            return Err(ApiError::new(
                invalid_request("frontmatter must be a JSON object"),
                state.dev_mode,
            ));
        }
    };

    let root = state.root.clone();
    let content = request.content;
    let file = run_blocking(&state, move || {
        SaveOperation::new(&root).execute(&slug, &header, content.as_deref())
    })
    .await?;

    Ok(Json(SaveResponse {
        success: true,
        path: file.relative_path(),
        slug: file.slug,
    }))
}

fn parse_save_request(body: &[u8]) -> Result<SaveRequest, FrontmatterError> {
    if body.is_empty() {
        return Err(invalid_request("request body is empty"));
    }
    Ok(serde_json::from_slice(body)?)
}
