//! Timetable queries against rozklad-pkp.pl.
//!
//! [`Timetable`] ties the pieces together: it builds request paths, fetches
//! them through a [`Fetcher`], and turns the bodies into domain values.

mod error;
mod query;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::domain::{Journey, Station, dedup_journeys};
use crate::scrape::{JourneyExtractor, RegexJourneyExtractor, parse_stations};
use crate::site::Fetcher;

pub use error::TimetableError;
pub use query::ConnectionQuery;

/// Path of the station search endpoint.
const STATION_SEARCH_PATH: &str = "station/search";

/// Station and connection lookups.
#[derive(Debug)]
pub struct Timetable<F, E = RegexJourneyExtractor> {
    site: F,
    extractor: E,
    query: ConnectionQuery,
}

impl<F: Fetcher> Timetable<F> {
    /// Create a timetable over `site` with the default extractor and query.
    pub fn new(site: F) -> Self {
        Self {
            site,
            extractor: RegexJourneyExtractor,
            query: ConnectionQuery::default(),
        }
    }
}

impl<F: Fetcher, E: JourneyExtractor> Timetable<F, E> {
    /// Swap the results page extractor.
    pub fn with_extractor<E2: JourneyExtractor>(self, extractor: E2) -> Timetable<F, E2> {
        Timetable {
            site: self.site,
            extractor,
            query: self.query,
        }
    }

    /// Use a custom connection query.
    pub fn with_query(mut self, query: ConnectionQuery) -> Self {
        self.query = query;
        self
    }

    /// The underlying site.
    pub fn site(&self) -> &F {
        &self.site
    }

    /// Find stations whose name matches `pattern`.
    ///
    /// Stations come back in the site's order, which is by relevance.
    pub async fn stations(&self, pattern: &str) -> Result<Vec<Station>, TimetableError> {
        // The site expects `%20` for spaces; a literal `+` is already `%2B`.
        let term = url::form_urlencoded::byte_serialize(pattern.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        let path = format!("{STATION_SEARCH_PATH}?term={term}&short=0");

        let body = self.site.get(&path).await?;
        let stations = parse_stations(&body)?;
        debug!(pattern, found = stations.len(), "Station search complete");

        Ok(stations)
    }

    /// Find connections between two station ids departing around `date`/`time`.
    ///
    /// Journeys are in page order with repeated `(departure, arrival)` pairs
    /// removed. A page with no recognisable rows gives an empty list.
    pub async fn connections(
        &self,
        from_id: &str,
        to_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Vec<Journey>, TimetableError> {
        let path = self.query.to_path(from_id, to_id, date, time);
        let page = self.site.get(&path).await?;

        let rows = self.extractor.extract(&page);
        let found = rows.len();
        let journeys = dedup_journeys(rows.into_iter().map(|row| row.into_journey()));
        debug!(found, unique = journeys.len(), "Connection search complete");

        Ok(journeys)
    }

    /// The connection to take. See [`next_connection`].
    pub async fn connection(
        &self,
        from_id: &str,
        to_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Journey>, TimetableError> {
        let journeys = self.connections(from_id, to_id, date, time).await?;
        Ok(next_connection(&journeys).cloned())
    }
}

/// The connection to take from a result list: the second one, if any.
///
/// The site's first row is not a usable departure, so index 1 is picked
/// and fewer than two results give `None`.
pub fn next_connection(journeys: &[Journey]) -> Option<&Journey> {
    journeys.get(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::RawJourney;
    use crate::site::{MockSite, SiteError};

    const SAMPLE_PAGE: &str = include_str!("../../data/connections.html");

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn time() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 0, 0).unwrap()
    }

    fn row(dep: &str, arr: &str) -> String {
        format!(
            r#"<span>ODJAZD</span><span>{dep}</span><span>PRZYJAZD</span><span>{arr}</span><td class="products-column"><img alt="R 1"></td>"#
        )
    }

    fn times(journeys: &[Journey]) -> Vec<(&str, &str)> {
        journeys.iter().map(|j| (j.departure(), j.arrival())).collect()
    }

    #[tokio::test]
    async fn stations_end_to_end() {
        let site = MockSite::new().with_page(
            "station/search",
            r#"[{"name":"Warszawa Centralna","value":"123"}]"#,
        );
        let timetable = Timetable::new(site);

        let stations = timetable.stations("Warszawa").await.unwrap();
        assert_eq!(stations, vec![Station::new("Warszawa Centralna", "123")]);
        assert_eq!(
            timetable.site().requested(),
            vec!["station/search?term=Warszawa&short=0"]
        );
    }

    #[tokio::test]
    async fn stations_pattern_is_encoded() {
        let site = MockSite::new().with_page("station/search", "[]");
        let timetable = Timetable::new(site);

        timetable.stations("Kraków Gł&").await.unwrap();
        assert_eq!(
            timetable.site().requested(),
            vec!["station/search?term=Krak%C3%B3w%20G%C5%82%26&short=0"]
        );
    }

    #[tokio::test]
    async fn stations_spaces_and_plus_signs() {
        let site = MockSite::new().with_page("station/search", "[]");
        let timetable = Timetable::new(site);

        timetable.stations("Warszawa Centralna").await.unwrap();
        timetable.stations("A+B").await.unwrap();
        assert_eq!(
            timetable.site().requested(),
            vec![
                "station/search?term=Warszawa%20Centralna&short=0",
                "station/search?term=A%2BB&short=0",
            ]
        );
    }

    #[tokio::test]
    async fn stations_bad_json_is_scrape_error() {
        let site = MockSite::new().with_page("station/search", r#"[{"name":"x"}]"#);
        let err = Timetable::new(site).stations("x").await.unwrap_err();
        assert!(matches!(err, TimetableError::Scrape(_)));
    }

    #[tokio::test]
    async fn site_failure_is_site_error() {
        let err = Timetable::new(MockSite::new())
            .stations("x")
            .await
            .unwrap_err();
        assert!(matches!(err, TimetableError::Site(SiteError::Api { status: 404, .. })));
    }

    #[tokio::test]
    async fn connections_from_sample_page() {
        let site = MockSite::new().with_page("pl/tp", SAMPLE_PAGE);
        let timetable = Timetable::new(site);

        let journeys = timetable
            .connections("5100065", "5100028", date(), time())
            .await
            .unwrap();

        assert_eq!(
            times(&journeys),
            vec![("14:02", "17:01"), ("14:35", "17:25"), ("15:10", "18:49")]
        );
        assert_eq!(journeys[0].trains()[0].to_string(), "IC5310 Szkuner");
        assert_eq!(journeys[1].trains().len(), 2);
        assert!(journeys[2].trains().is_empty());

        let requested = timetable.site().requested();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].starts_with("pl/tp?"));
        assert!(requested[0].contains("&REQ0JourneyStopsS0G=5100065&"));
        assert!(requested[0].contains("&REQ0JourneyStopsZ0G=5100028&"));
        assert!(requested[0].contains("&date=17.10.26&"));
        assert!(requested[0].contains("&time=14:00&"));
    }

    #[tokio::test]
    async fn connections_uses_custom_query() {
        let site = MockSite::new().with_page("pl/tp", "");
        let timetable =
            Timetable::new(site).with_query(ConnectionQuery::new().with_change_time("0:15"));

        timetable.connections("1", "2", date(), time()).await.unwrap();
        assert!(timetable.site().requested()[0].contains("&REQ0HafasChangeTime=0:15&"));
    }

    #[tokio::test]
    async fn connections_empty_page() {
        let site = MockSite::new().with_page("pl/tp", "<html>Brak połączeń</html>");
        let journeys = Timetable::new(site)
            .connections("1", "2", date(), time())
            .await
            .unwrap();
        assert!(journeys.is_empty());
    }

    #[tokio::test]
    async fn connection_is_second_result() {
        let site = MockSite::new().with_page("pl/tp", SAMPLE_PAGE);
        let journey = Timetable::new(site)
            .connection("1", "2", date(), time())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(journey.departure(), "14:35");
        assert_eq!(journey.arrival(), "17:25");
    }

    #[tokio::test]
    async fn connection_absent_with_fewer_than_two() {
        for page in [String::new(), row("10:00", "11:00")] {
            let site = MockSite::new().with_page("pl/tp", page);
            let journey = Timetable::new(site)
                .connection("1", "2", date(), time())
                .await
                .unwrap();
            assert!(journey.is_none());
        }
    }

    #[tokio::test]
    async fn connection_counts_after_dedup() {
        // Two rows, but the same pair: only one journey survives.
        let page = format!("{}{}", row("10:00", "11:00"), row("10:00", "11:00"));
        let site = MockSite::new().with_page("pl/tp", page);
        let journey = Timetable::new(site)
            .connection("1", "2", date(), time())
            .await
            .unwrap();
        assert!(journey.is_none());
    }

    #[test]
    fn next_connection_picks_index_one() {
        let journeys: Vec<Journey> = ["10:00", "11:00", "12:00"]
            .iter()
            .map(|t| Journey::new(*t, "23:00", Vec::new()))
            .collect();

        assert!(next_connection(&[]).is_none());
        assert!(next_connection(&journeys[..1]).is_none());
        assert_eq!(next_connection(&journeys[..2]).unwrap().departure(), "11:00");
        assert_eq!(next_connection(&journeys).unwrap().departure(), "11:00");
    }

    struct FixedExtractor;

    impl JourneyExtractor for FixedExtractor {
        fn extract(&self, _page: &str) -> Vec<RawJourney> {
            vec![
                RawJourney {
                    departure: "01:00".into(),
                    arrival: "02:00".into(),
                    labels: vec![],
                },
                RawJourney {
                    departure: "03:00".into(),
                    arrival: "04:00".into(),
                    labels: vec!["KS 7".into()],
                },
            ]
        }
    }

    #[tokio::test]
    async fn extractor_is_swappable() {
        let site = MockSite::new().with_page("pl/tp", "ignored");
        let timetable = Timetable::new(site).with_extractor(FixedExtractor);

        let journey = timetable
            .connection("1", "2", date(), time())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(journey.departure(), "03:00");
        assert_eq!(journey.trains()[0].kind(), "KS");
    }
}
