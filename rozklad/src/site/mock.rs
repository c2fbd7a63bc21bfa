//! In-memory stand-in for the timetable site.
//!
//! Serves canned bodies keyed by path prefix and records every path
//! requested, so tests can check both what was asked and what came back.

use std::sync::Mutex;

use super::client::Fetcher;
use super::error::SiteError;

/// Canned-response site.
#[derive(Debug, Default)]
pub struct MockSite {
    /// `(path prefix, body)`, first match wins.
    pages: Vec<(String, String)>,
    requested: Mutex<Vec<String>>,
}

impl MockSite {
    /// Create a site that knows no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for any path starting with `prefix`.
    pub fn with_page(mut self, prefix: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.push((prefix.into(), body.into()));
        self
    }

    /// Paths requested so far, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl Fetcher for MockSite {
    async fn get(&self, path: &str) -> Result<String, SiteError> {
        if let Ok(mut paths) = self.requested.lock() {
            paths.push(path.to_string());
        }

        self.pages
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| SiteError::Api {
                status: 404,
                message: format!("No mock page for {path}"),
            })
    }
}
