//! Journey records and deduplication.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::TrainLabel;

/// One departure/arrival pairing and the trains operating it.
///
/// # Identity
///
/// Two journeys are equal when their departure and arrival times are equal.
/// The train list is ignored: the results page repeats rows, and a repeat
/// with a differently rendered train list is still the same connection.
/// `Hash` agrees with this.
#[derive(Debug, Clone)]
pub struct Journey {
    departure: String,
    arrival: String,
    trains: Vec<TrainLabel>,
}

impl Journey {
    /// Creates a journey. Times are kept exactly as the site printed them.
    pub fn new(
        departure: impl Into<String>,
        arrival: impl Into<String>,
        trains: Vec<TrainLabel>,
    ) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
            trains,
        }
    }

    /// Departure time, `HH:MM`.
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// Arrival time, `HH:MM`.
    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    /// Trains in the order they appear on the page. May be empty.
    pub fn trains(&self) -> &[TrainLabel] {
        &self.trains
    }

    /// The first train boarded, if the page listed any.
    pub fn first_train(&self) -> Option<&TrainLabel> {
        self.trains.first()
    }

    fn key(&self) -> (&str, &str) {
        (&self.departure, &self.arrival)
    }
}

impl PartialEq for Journey {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Journey {}

impl Hash for Journey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}  ", self.departure, self.arrival)?;
        for (i, train) in self.trains.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{train}")?;
        }
        Ok(())
    }
}

/// Keep the first journey for each `(departure, arrival)` pair.
///
/// Order of the survivors is the order they were first seen in.
pub fn dedup_journeys<I>(journeys: I) -> Vec<Journey>
where
    I: IntoIterator<Item = Journey>,
{
    let mut seen = HashSet::new();
    journeys
        .into_iter()
        .filter(|j| seen.insert((j.departure.clone(), j.arrival.clone())))
        .collect()
}
