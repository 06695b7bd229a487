//! Client configuration

use crate::error::{ErrorKind, Result};

/// Server used by the terminal front end when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding [`DEFAULT_SERVER_URL`].
pub const ENV_SERVER_URL: &str = "ACTIVITY_BOARD_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint path. Empty means same-origin relative paths.
    pub base_url: String,
}

impl BoardConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Relative paths, resolved by the browser against the page's origin.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    /// Joins an already-encoded path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Refuses `.` and `..` as a path segment. URL parsers treat them as
/// directory references even when percent-encoded, so the request would land
/// on another endpoint.
pub fn check_path_segment(segment: &str) -> Result<&str> {
    match segment {
        "." | ".." => {
            Err(ErrorKind::UrlError(format!("{segment:?} is not a usable path segment")).into())
        }
        _ => Ok(segment),
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
