//! Response parsing error types.

/// Errors raised when an upstream response does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Body was not the JSON we expected (bad syntax, missing field, ...)
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
