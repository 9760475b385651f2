//! Network seed files.
//!
//! A seed file is a JSON document describing stations and lines, used to
//! bootstrap the in-memory store at startup:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "강남역" }],
//!   "lines": [
//!     {
//!       "name": "신분당선",
//!       "color": "red",
//!       "sections": [{ "up": 1, "down": 2, "distance": 10 }]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Distance, InvalidSection, Line, Section, Station, StationId};

use super::store::{NetworkError, NetworkStore};

/// Errors from loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Failed to read the file
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or an entry failing field validation
    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),

    /// A section entry violates a section invariant
    #[error("invalid section: {0}")]
    Section(#[from] InvalidSection),

    /// An entry failed cross-reference validation against the store
    #[error("invalid seed data: {0}")]
    Invalid(#[from] NetworkError),
}

/// A parsed seed document, not yet cross-validated.
#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    stations: Vec<StationEntry>,
    #[serde(default)]
    lines: Vec<LineEntry>,
}

#[derive(Debug, Deserialize)]
struct StationEntry {
    id: StationId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LineEntry {
    name: String,
    color: String,
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl NetworkFile {
    /// Parse a seed document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build a store from the document.
    ///
    /// Stations are registered first, then lines; every section endpoint
    /// must name a registered station.
    pub fn into_store(self) -> Result<NetworkStore, SeedError> {
        let store = NetworkStore::new();

        for entry in self.stations {
            store.insert_station(Station::new(entry.id, entry.name))?;
        }
        for entry in self.lines {
            let mut sections = Vec::with_capacity(entry.sections.len());
            for s in entry.sections {
                sections.push(Section::new(s.up, s.down, s.distance)?);
            }
            store.add_line(Line::new(entry.name, entry.color, sections))?;
        }

        Ok(store)
    }
}

/// Load a store from a seed file.
pub fn load_network(path: &Path) -> Result<NetworkStore, SeedError> {
    NetworkFile::load(path)?.into_store()
}

/// The built-in network used when no seed file is configured.
///
/// A small slice of the Seoul subway around 강남: line 2, line 3 and
/// 신분당선, with sections in both directions.
const SAMPLE_NETWORK: &str = r#"{
  "stations": [
    { "id": 1, "name": "교대역" },
    { "id": 2, "name": "강남역" },
    { "id": 3, "name": "역삼역" },
    { "id": 4, "name": "남부터미널역" },
    { "id": 5, "name": "양재역" },
    { "id": 6, "name": "매봉역" }
  ],
  "lines": [
    {
      "name": "2호선",
      "color": "green",
      "sections": [
        { "up": 1, "down": 2, "distance": 11 },
        { "up": 2, "down": 1, "distance": 11 },
        { "up": 2, "down": 3, "distance": 8 },
        { "up": 3, "down": 2, "distance": 8 }
      ]
    },
    {
      "name": "3호선",
      "color": "orange",
      "sections": [
        { "up": 1, "down": 4, "distance": 3 },
        { "up": 4, "down": 1, "distance": 3 },
        { "up": 4, "down": 5, "distance": 6 },
        { "up": 5, "down": 4, "distance": 6 },
        { "up": 5, "down": 6, "distance": 2 },
        { "up": 6, "down": 5, "distance": 2 }
      ]
    },
    {
      "name": "신분당선",
      "color": "red",
      "sections": [
        { "up": 2, "down": 5, "distance": 10 },
        { "up": 5, "down": 2, "distance": 10 }
      ]
    }
  ]
}"#;

/// Build the built-in sample network.
pub fn sample_network() -> NetworkStore {
    NetworkFile::from_json(SAMPLE_NETWORK)
        .and_then(NetworkFile::into_store)
        .expect("built-in sample network is valid")
}
