//! Line and section types.
//!
//! A `Line` owns an ordered list of directed, weighted `Section`s.
//! Sections hold plain station ids rather than station entities, so a
//! snapshot of the catalog is trivially cloneable and can never form
//! reference cycles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// Error returned when constructing an invalid distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: must be positive")]
pub struct InvalidDistance;

/// A section length in the network's distance unit.
///
/// Distances are always positive; zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// Construct a distance from a raw value.
    pub fn new(raw: u32) -> Result<Self, InvalidDistance> {
        if raw == 0 {
            return Err(InvalidDistance);
        }
        Ok(Distance(raw))
    }

    /// Returns the raw distance value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Distance::new(raw)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> u32 {
        distance.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when constructing an invalid section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: {reason}")]
pub struct InvalidSection {
    reason: &'static str,
}

/// A directed, weighted connection between two stations on a line.
///
/// # Invariants
///
/// - `up != down` (a section never loops back to its own station)
/// - the distance is positive (guaranteed by [`Distance`])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    /// Construct a section from `up` to `down`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `up == down`.
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Result<Self, InvalidSection> {
        if up == down {
            return Err(InvalidSection {
                reason: "up and down stations must differ",
            });
        }
        Ok(Section { up, down, distance })
    }

    /// Returns the id of the station this section leaves.
    pub fn up(&self) -> StationId {
        self.up
    }

    /// Returns the id of the station this section reaches.
    pub fn down(&self) -> StationId {
        self.down
    }

    /// Returns the section length.
    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// A subway line: an ordered owner of sections.
///
/// Each line contributes its sections to the route graph independently;
/// two lines connecting the same pair of stations yield parallel edges.
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    color: String,
    sections: Vec<Section>,
}

impl Line {
    /// Create a line.
    pub fn new(name: impl Into<String>, color: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            sections,
        }
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the line color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the ids of all stations this line touches.
    ///
    /// Ids appear in first-occurrence order over the section list, each
    /// id once.
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids = Vec::new();
        for section in &self.sections {
            for id in [section.up(), section.down()] {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}
