//! Station search response parsing.

use serde::{Deserialize, Deserializer};

use crate::domain::Station;

use super::error::ScrapeError;

/// One entry of the station search response.
#[derive(Debug, Clone, Deserialize)]
struct StationDto {
    name: String,
    #[serde(deserialize_with = "string_or_number")]
    value: String,
}

impl From<StationDto> for Station {
    fn from(dto: StationDto) -> Self {
        Station::new(dto.name, dto.value)
    }
}

/// The site has served ids both as strings and as bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Decode a station search body.
///
/// Expects a JSON array of `{"name": ..., "value": ...}` objects. Order is
/// kept as the site returned it; nothing is sorted or deduplicated.
pub fn parse_stations(body: &str) -> Result<Vec<Station>, ScrapeError> {
    let dtos: Vec<StationDto> = serde_json::from_str(body).map_err(|e| ScrapeError::Json {
        message: e.to_string(),
    })?;

    Ok(dtos.into_iter().map(Station::from).collect())
}
