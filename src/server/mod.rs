//! Local-only admin HTTP API
//!
//! - `GET /api/admin/seo`: SEO listing of every document
//! - `GET /api/admin/content/:slug`: one document's header and body
//! - `PUT /api/admin/content/:slug`: replace a document's header and body
//!
//! Every route sits behind [`access::require_local`].

pub mod access;
pub mod handlers;
pub mod response;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{Next, from_fn};
use axum::response::Response;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, info, warn};

use crate::config::ServerSettings;
use crate::content::ContentRoot;
use crate::error::{Result, server_failed};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub root: ContentRoot,
    pub dev_mode: bool,
}

impl AppState {
    pub fn new(root: ContentRoot, dev_mode: bool) -> Self {
        Self { root, dev_mode }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/seo", get(handlers::list_documents))
        .route(
            "/api/admin/content/:slug",
            get(handlers::get_document).put(handlers::put_document),
        )
        .layer(from_fn(access::require_local))
        .layer(from_fn(trace_requests))
        .with_state(state)
}

async fn trace_requests(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "admin.request",
        method = %request.method(),
        route = %request.uri().path(),
    );
    let response = next.run(request).instrument(span).await;
    debug!(status = response.status().as_u16(), "admin response");
    response
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| server_failed(e.to_string()))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(root: ContentRoot, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.addr)
        .await
        .map_err(|e| server_failed(format!("cannot bind {}: {e}", settings.addr)))?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| server_failed(e.to_string()))?;
    info!(
        addr = %local_addr,
        root = %root.path().display(),
        dev = settings.dev_mode,
        "admin API listening"
    );
    serve_on(listener, AppState::new(root, settings.dev_mode), shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down admin API");
}
