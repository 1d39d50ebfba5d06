//! Shared page chrome (header + footer) wrapped around every page.
//!
//! The fragments are opaque: they are loaded once and emitted verbatim.

use std::path::{Path, PathBuf};

pub const HEADER_FILE: &str = "header.html";
pub const FOOTER_FILE: &str = "footer.html";

// Head is left open so the page's own `<title>` lands in it; the parser closes it at the first body element.
const BUILTIN_HEADER: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n";
const BUILTIN_FOOTER: &str = "</body>\n</html>\n";

#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("failed to read include fragment {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the chrome in use came from; logged at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeSource {
    Builtin,
    IncludeDir,
}

impl ChromeSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::IncludeDir => "include_dir",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub header: String,
    pub footer: String,
}

impl Chrome {
    /// Minimal document shell used when no include directory is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self { header: BUILTIN_HEADER.to_owned(), footer: BUILTIN_FOOTER.to_owned() }
    }

    /// Load `header.html` and `footer.html` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Read`] naming the first fragment that could not be read.
    pub fn load(dir: &Path) -> Result<Self, ChromeError> {
        let header = read_fragment(&dir.join(HEADER_FILE))?;
        let footer = read_fragment(&dir.join(FOOTER_FILE))?;
        Ok(Self { header, footer })
    }

    /// Load from `include_dir` when configured, otherwise fall back to [`Chrome::builtin`].
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Read`] if an include directory is configured but a fragment is unreadable.
    pub fn resolve(include_dir: Option<&Path>) -> Result<(Self, ChromeSource), ChromeError> {
        match include_dir {
            Some(dir) => Ok((Self::load(dir)?, ChromeSource::IncludeDir)),
            None => Ok((Self::builtin(), ChromeSource::Builtin)),
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_fragment(path: &Path) -> Result<String, ChromeError> {
    std::fs::read_to_string(path).map_err(|source| ChromeError::Read { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "chrome_test.rs"]
mod tests;
