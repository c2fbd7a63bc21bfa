//! Connection results page scraping.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Journey, TrainLabel};

/// Departure time, then arrival time, then the products column up to the
/// end of its cell. Lazy between anchors so each departure pairs with the
/// nearest following arrival. `(?s)` lets a row span lines.
static JOURNEY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)ODJAZD</span><span>(\d+:\d+).*?PRZYJAZD</span><span>(\d+:\d+).*?class="products-column"(.*?)</td>"#,
    )
    .expect("JOURNEY_ROW regex to compile")
});

static IMG_ALT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<img\s[^>]*?\balt="([^"]*)"[^>]*>"#).expect("IMG_ALT regex to compile")
});

/// A journey row as found on the page, before label normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJourney {
    pub departure: String,
    pub arrival: String,
    /// `alt` text of each train icon, in page order.
    pub labels: Vec<String>,
}

impl RawJourney {
    /// Normalise the labels and build a domain journey.
    pub fn into_journey(self) -> Journey {
        let trains = self.labels.iter().map(|l| TrainLabel::parse(l)).collect();
        Journey::new(self.departure, self.arrival, trains)
    }
}

/// Pulls journey rows out of a connection results page.
///
/// Implementations must return rows in page order and must not drop rows
/// whose products column has no train icons.
pub trait JourneyExtractor {
    fn extract(&self, page: &str) -> Vec<RawJourney>;
}

/// Regex scan over the whole page.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexJourneyExtractor;

impl JourneyExtractor for RegexJourneyExtractor {
    fn extract(&self, page: &str) -> Vec<RawJourney> {
        JOURNEY_ROW
            .captures_iter(page)
            .map(|caps| RawJourney {
                departure: caps[1].to_string(),
                arrival: caps[2].to_string(),
                labels: IMG_ALT
                    .captures_iter(&caps[3])
                    .map(|img| img[1].to_string())
                    .collect(),
            })
            .collect()
    }
}
