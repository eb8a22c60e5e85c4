//! Loopback-only gate for the admin API
//!
//! The check trusts the request's `Host` header, so it keeps the API off
//! accidental deployments but is not access control.

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::error::FrontmatterError;

/// Host part of a `Host` header value, without port or IPv6 brackets.
pub fn host_name(host: &str) -> &str {
    let host = host.trim();
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    // Bare IPv6 literal, no port.
    if host.matches(':').count() > 1 {
        return host;
    }
    host.split(':').next().unwrap_or(host)
}

pub fn is_local_host(host: &str) -> bool {
    let name = host_name(host).to_ascii_lowercase();
    name == "localhost" || name.ends_with(".localhost") || name == "127.0.0.1" || name == "::1"
}

fn request_host(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().host())
}

/// Reject requests for non-loopback hosts before any handler runs.
pub async fn require_local(request: Request, next: Next) -> Response {
    match request_host(&request) {
        Some(host) if is_local_host(host) => next.run(request).await,
        host => {
            warn!(host = host.unwrap_or("<none>"), "rejected non-local admin request");
            denied()
        }
    }
}

fn denied() -> Response {
    let body = Json(json!({ "error": FrontmatterError::AccessDenied.to_string() }));
    (StatusCode::FORBIDDEN, body).into_response()
}
