mod chrome;
mod config;
mod page;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::chrome::{Chrome, ChromeError};
use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Chrome(#[from] ChromeError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before the subscriber so `.env` can set RUST_LOG.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Some(e) = config::reportable_dotenv_error(dotenv) {
        tracing::debug!(error = %e, ".env not loaded");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "manual-page failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let (chrome, source) = Chrome::resolve(config.include_dir.as_deref())?;
    tracing::info!(chrome = source.as_str(), include_dir = ?config.include_dir, "page chrome ready");

    if !config.docs_dir.is_dir() {
        tracing::warn!(docs_dir = %config.docs_dir.display(), "docs directory missing; manual links will 404");
    }

    let state = state::AppState::new(&chrome);
    let app = routes::app(state, &config.docs_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, docs_dir = %config.docs_dir.display(), "manual-page listening");
    axum::serve(listener, app).await?;
    Ok(())
}
