//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Section, Station};
use crate::path::FoundPath;

/// Query parameters for a path search.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    /// Source station id
    pub source: u64,

    /// Target station id
    pub target: u64,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationSummary {
    /// Station id
    pub id: u64,

    /// Display name
    pub name: String,
}

impl StationSummary {
    /// Build a summary from a resolved station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().get(),
            name: station.name().to_string(),
        }
    }
}

/// Response for a path search.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Stations from source to target, inclusive
    pub stations: Vec<StationSummary>,

    /// Total distance travelled
    pub distance: u64,
}

impl PathResponse {
    /// Build a response from a computed path.
    pub fn from_path(path: &FoundPath) -> Self {
        Self {
            stations: path
                .stations()
                .iter()
                .map(StationSummary::from_station)
                .collect(),
            distance: path.distance(),
        }
    }
}

/// Response listing all registered stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Stations ordered by id
    pub stations: Vec<StationSummary>,
}

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Display name
    pub name: String,
}

/// A section in line requests and responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct SectionBody {
    /// Up station id
    pub up: u64,

    /// Down station id
    pub down: u64,

    /// Section distance
    pub distance: u32,
}

impl SectionBody {
    /// Build a body from a domain section.
    pub fn from_section(section: &Section) -> Self {
        Self {
            up: section.up().get(),
            down: section.down().get(),
            distance: section.distance().get(),
        }
    }
}

/// Request to register a line with its sections.
#[derive(Debug, Deserialize)]
pub struct CreateLineRequest {
    /// Line name (unique)
    pub name: String,

    /// Line color
    pub color: String,

    /// Sections, in order
    #[serde(default)]
    pub sections: Vec<SectionBody>,
}

/// A line in responses.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Line name
    pub name: String,

    /// Line color
    pub color: String,

    /// Sections, in order
    pub sections: Vec<SectionBody>,
}

impl LineSummary {
    /// Build a summary from a line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            color: line.color().to_string(),
            sections: line.sections().iter().map(SectionBody::from_section).collect(),
        }
    }
}

/// Response listing all registered lines.
#[derive(Debug, Serialize)]
pub struct LineListResponse {
    /// Lines in registration order
    pub lines: Vec<LineSummary>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}
