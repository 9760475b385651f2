//! In-memory network store.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::{Line, PathError, Station, StationId};

/// Authoritative station lookup.
///
/// The registry is the single source of station identity; a query for an
/// id it does not know fails with [`PathError::StationNotFound`].
pub trait StationRegistry {
    /// Resolve a station by id.
    fn resolve(&self, id: StationId) -> Result<Station, PathError>;
}

/// Supplier of the line/section catalog.
pub trait LineCatalog {
    /// Returns an owned snapshot of all lines.
    ///
    /// Callers build per-query state from the snapshot; later catalog
    /// changes never affect a snapshot already taken.
    fn lines(&self) -> Vec<Line>;
}

/// Error from store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station with this id is already registered
    #[error("station id {0} is already registered")]
    DuplicateStationId(StationId),

    /// Station names must be non-empty
    #[error("station name must not be empty")]
    EmptyStationName,

    /// A line with this name is already registered
    #[error("line {0:?} is already registered")]
    DuplicateLineName(String),

    /// A section references a station the registry does not know
    #[error("section references unknown station {0}")]
    UnknownStation(StationId),
}

struct NetworkState {
    stations: BTreeMap<StationId, Station>,
    lines: Vec<Line>,
    next_station_id: u64,
}

impl Default for NetworkState {
    fn default() -> Self {
        Self {
            stations: BTreeMap::new(),
            lines: Vec::new(),
            next_station_id: 1,
        }
    }
}

/// In-memory station registry and line catalog.
///
/// All reads take a snapshot under a read lock; mutations validate and
/// apply under a write lock. No state is shared with snapshots once the
/// lock is released.
#[derive(Default)]
pub struct NetworkStore {
    inner: RwLock<NetworkState>,
}

impl NetworkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, NetworkState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NetworkState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new station, assigning it the next free id.
    pub fn add_station(&self, name: &str) -> Result<Station, NetworkError> {
        if name.trim().is_empty() {
            return Err(NetworkError::EmptyStationName);
        }

        let mut state = self.write();
        // next_station_id starts at 1 and only grows
        let id = StationId::new(state.next_station_id).unwrap();
        let station = Station::new(id, name);

        state.stations.insert(id, station.clone());
        state.next_station_id += 1;

        debug!(id = %id, name, "registered station");
        Ok(station)
    }

    /// Register a station with an explicit id (seed-file ingestion).
    pub fn insert_station(&self, station: Station) -> Result<(), NetworkError> {
        let mut state = self.write();

        if station.name().trim().is_empty() {
            return Err(NetworkError::EmptyStationName);
        }
        if state.stations.contains_key(&station.id()) {
            return Err(NetworkError::DuplicateStationId(station.id()));
        }

        state.next_station_id = state.next_station_id.max(station.id().get().saturating_add(1));
        state.stations.insert(station.id(), station);
        Ok(())
    }

    /// Register a line.
    ///
    /// Every section endpoint must already be a registered station, and
    /// line names are unique.
    pub fn add_line(&self, line: Line) -> Result<(), NetworkError> {
        let mut state = self.write();

        if state.lines.iter().any(|l| l.name() == line.name()) {
            return Err(NetworkError::DuplicateLineName(line.name().to_string()));
        }
        for id in line.station_ids() {
            if !state.stations.contains_key(&id) {
                return Err(NetworkError::UnknownStation(id));
            }
        }

        debug!(name = line.name(), sections = line.sections().len(), "registered line");
        state.lines.push(line);
        Ok(())
    }

    /// Returns all registered stations, ordered by id.
    pub fn stations(&self) -> Vec<Station> {
        self.read().stations.values().cloned().collect()
    }

    /// Returns the number of registered stations.
    pub fn station_count(&self) -> usize {
        self.read().stations.len()
    }

    /// Returns the number of registered lines.
    pub fn line_count(&self) -> usize {
        self.read().lines.len()
    }
}

impl StationRegistry for NetworkStore {
    fn resolve(&self, id: StationId) -> Result<Station, PathError> {
        self.read()
            .stations
            .get(&id)
            .cloned()
            .ok_or(PathError::StationNotFound(id))
    }
}

impl LineCatalog for NetworkStore {
    fn lines(&self) -> Vec<Line> {
        self.read().lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, Section};

    fn sid(raw: u64) -> StationId {
        StationId::new(raw).unwrap()
    }

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(sid(up), sid(down), Distance::new(distance).unwrap()).unwrap()
    }

    #[test]
    fn add_station_assigns_sequential_ids() {
        let store = NetworkStore::new();

        let a = store.add_station("강남역").unwrap();
        let b = store.add_station("양재역").unwrap();

        assert_eq!(a.id(), sid(1));
        assert_eq!(b.id(), sid(2));
        assert_eq!(store.station_count(), 2);
    }

    #[test]
    fn add_station_rejects_empty_name() {
        let store = NetworkStore::new();
        assert_eq!(
            store.add_station("  "),
            Err(NetworkError::EmptyStationName)
        );
    }

    #[test]
    fn resolve_known_station() {
        let store = NetworkStore::new();
        let station = store.add_station("강남역").unwrap();

        let resolved = store.resolve(station.id()).unwrap();
        assert_eq!(resolved.name(), "강남역");
    }

    #[test]
    fn resolve_unknown_station_fails() {
        let store = NetworkStore::new();
        assert_eq!(
            store.resolve(sid(99)),
            Err(PathError::StationNotFound(sid(99)))
        );
    }

    #[test]
    fn insert_station_rejects_duplicate_id() {
        let store = NetworkStore::new();
        store
            .insert_station(Station::new(sid(1), "강남역"))
            .unwrap();

        assert_eq!(
            store.insert_station(Station::new(sid(1), "양재역")),
            Err(NetworkError::DuplicateStationId(sid(1)))
        );
    }

    #[test]
    fn add_station_continues_after_explicit_ids() {
        let store = NetworkStore::new();
        store
            .insert_station(Station::new(sid(10), "강남역"))
            .unwrap();

        let next = store.add_station("양재역").unwrap();
        assert_eq!(next.id(), sid(11));
    }

    #[test]
    fn add_line_rejects_unknown_station() {
        let store = NetworkStore::new();
        store
            .insert_station(Station::new(sid(1), "강남역"))
            .unwrap();

        let line = Line::new("2호선", "green", vec![section(1, 2, 10)]);
        assert_eq!(
            store.add_line(line),
            Err(NetworkError::UnknownStation(sid(2)))
        );
        assert_eq!(store.line_count(), 0);
    }

    #[test]
    fn add_line_rejects_duplicate_name() {
        let store = NetworkStore::new();
        store.add_line(Line::new("2호선", "green", vec![])).unwrap();

        assert_eq!(
            store.add_line(Line::new("2호선", "lime", vec![])),
            Err(NetworkError::DuplicateLineName("2호선".to_string()))
        );
    }

    #[test]
    fn lines_snapshot_is_independent_of_later_mutation() {
        let store = NetworkStore::new();
        store
            .insert_station(Station::new(sid(1), "강남역"))
            .unwrap();
        store
            .insert_station(Station::new(sid(2), "양재역"))
            .unwrap();
        store
            .add_line(Line::new("신분당선", "red", vec![section(1, 2, 10)]))
            .unwrap();

        let snapshot = store.lines();
        store.add_line(Line::new("2호선", "green", vec![])).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.lines().len(), 2);
    }

    #[test]
    fn stations_are_ordered_by_id() {
        let store = NetworkStore::new();
        store
            .insert_station(Station::new(sid(3), "방배역"))
            .unwrap();
        store
            .insert_station(Station::new(sid(1), "강남역"))
            .unwrap();

        let ids: Vec<_> = store.stations().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![sid(1), sid(3)]);
    }
}
