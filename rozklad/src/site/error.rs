//! Site client error types.

/// Errors that can occur when fetching from the timetable site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// HTTP request failed (connection refused, timeout, bad body encoding, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Site answered with a non-success status
    #[error("site error {status}: {message}")]
    Api { status: u16, message: String },
}
