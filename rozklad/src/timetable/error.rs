//! Timetable error types.

use crate::scrape::ScrapeError;
use crate::site::SiteError;

/// Errors from a timetable operation.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Fetching from the site failed
    #[error(transparent)]
    Site(#[from] SiteError),

    /// The site's answer could not be parsed
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}
