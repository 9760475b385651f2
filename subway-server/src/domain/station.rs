//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier: a positive integer key issued by the registry.
///
/// Id zero is never issued, so this type guarantees that any
/// `StationId` value is positive by construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let id = StationId::new(1).unwrap();
/// assert_eq!(id.get(), 1);
///
/// // Zero is rejected
/// assert!(StationId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct StationId(u64);

impl StationId {
    /// Construct a station id from a raw key.
    ///
    /// The key must be positive.
    pub fn new(raw: u64) -> Result<Self, InvalidStationId> {
        if raw == 0 {
            return Err(InvalidStationId {
                reason: "must be positive",
            });
        }
        Ok(StationId(raw))
    }

    /// Returns the raw integer key.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for StationId {
    type Error = InvalidStationId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        StationId::new(raw)
    }
}

impl From<StationId> for u64 {
    fn from(id: StationId) -> u64 {
        id.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway station.
///
/// Stations are identity-bearing: equality and hashing consider only the
/// id, and the name is display data. Stations are immutable once created
/// and owned by the registry; the rest of the system refers to them by id.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
