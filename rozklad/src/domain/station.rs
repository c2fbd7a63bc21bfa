//! Station records.

use std::fmt;

/// A station returned by the station search.
///
/// The identifier is assigned by the upstream site and is opaque to us;
/// its only use is as an endpoint of a connection search.
///
/// # Examples
///
/// ```
/// use rozklad::domain::Station;
///
/// let station = Station::new("Warszawa Centralna", "5100065");
/// assert_eq!(station.to_string(), "Warszawa Centralna [5100065]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    id: String,
}

impl Station {
    /// Creates a station from its display name and upstream identifier.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the upstream identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let station = Station::new("Kraków Główny", "5100028");
        assert_eq!(station.name(), "Kraków Główny");
        assert_eq!(station.id(), "5100028");
    }

    #[test]
    fn display() {
        let station = Station::new("Warszawa Centralna", "123");
        assert_eq!(format!("{}", station), "Warszawa Centralna [123]");
    }

    #[test]
    fn equality_uses_both_fields() {
        let a = Station::new("Gdynia Główna", "1");
        let b = Station::new("Gdynia Główna", "1");
        let c = Station::new("Gdynia Główna", "2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
