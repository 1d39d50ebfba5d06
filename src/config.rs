//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DOCS_DIR: &str = "docs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}' (expected 0-65535)")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the downloadable manuals, served under `/docs`.
    pub docs_dir: PathBuf,
    /// Directory holding `header.html` / `footer.html`. Built-in chrome when `None`.
    pub include_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DOCS_DIR`: default `docs`
    /// - `INCLUDE_DIR`: unset or empty means built-in chrome
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port number.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let docs_dir = non_empty(lookup("DOCS_DIR")).map_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR), PathBuf::from);
        let include_dir = non_empty(lookup("INCLUDE_DIR")).map(PathBuf::from);

        Ok(Self { port, docs_dir, include_dir })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, docs_dir: PathBuf::from(DEFAULT_DOCS_DIR), include_dir: None }
    }
}

/// Keep a `.env` load failure only when it is worth reporting; a missing file is the normal case.
#[must_use]
pub fn reportable_dotenv_error<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|e| !e.not_found())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
