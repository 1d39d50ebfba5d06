//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The manual page is served at `/manual` (and at its legacy `/manual.php`
//! address). Its links are relative, so the PDFs resolve under `/docs`, which
//! is a plain static-file service over the configured docs directory. Missing
//! PDFs are a 404 from that service.

pub mod manual;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState, docs_dir: &Path) -> Router {
    Router::new()
        .route("/manual", get(manual::manual_page))
        .route("/manual.php", get(manual::manual_page))
        .route("/healthz", get(healthz))
        .nest_service("/docs", ServeDir::new(docs_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
