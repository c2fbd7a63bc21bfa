//! Parsers for upstream responses.
//!
//! The station search answers with JSON; the connection search answers
//! with an HTML results page that is scraped with regular expressions.

mod error;
mod journeys;
mod stations;

pub use error::ScrapeError;
pub use journeys::{JourneyExtractor, RawJourney, RegexJourneyExtractor};
pub use stations::parse_stations;
