//! Path query facade.
//!
//! The single collaborator-facing entry point for path queries. A query
//! resolves both station ids against the registry, rejects degenerate
//! input, builds a fresh route graph from the current catalog snapshot
//! and runs the shortest path engine over it.

use tracing::debug;

use crate::domain::{PathError, Station, StationId};
use crate::network::{LineCatalog, StationRegistry};
use crate::routing::{RouteGraph, shortest_route};

/// A successfully computed path: the resolved stations from source to
/// target, inclusive, and the total distance travelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    stations: Vec<Station>,
    distance: u64,
}

impl FoundPath {
    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the total distance.
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

/// Path query facade over a station registry and a line catalog.
///
/// Constructed per query from borrowed collaborators and holds no state
/// across calls: each query builds its own private graph from a
/// read-only catalog snapshot, so concurrent queries need no
/// coordination.
pub struct PathService<'a, R, C> {
    registry: &'a R,
    catalog: &'a C,
}

impl<'a, R: StationRegistry, C: LineCatalog> PathService<'a, R, C> {
    /// Create a facade over the given collaborators.
    pub fn new(registry: &'a R, catalog: &'a C) -> Self {
        Self { registry, catalog }
    }

    /// Find the minimum-distance path between two stations.
    ///
    /// The query is atomic: it returns either a complete path or a
    /// single typed failure, never a partial result.
    ///
    /// # Errors
    ///
    /// - [`PathError::StationNotFound`] if either id is unknown to the
    ///   registry
    /// - [`PathError::DuplicateStation`] if both ids resolve to the same
    ///   station (checked before the catalog is read)
    /// - [`PathError::NoPathFound`] if no sequence of sections connects
    ///   the two stations
    pub fn find_path(&self, source: StationId, target: StationId) -> Result<FoundPath, PathError> {
        let start = self.registry.resolve(source)?;
        let end = self.registry.resolve(target)?;

        // A zero-length self path is not a meaningful answer; reject
        // before touching the catalog.
        if start == end {
            return Err(PathError::DuplicateStation(start.id()));
        }

        let lines = self.catalog.lines();
        let graph = RouteGraph::build(&lines);
        let route = shortest_route(&graph, start.id(), end.id())?;

        let mut stations = Vec::with_capacity(route.stations().len());
        for &id in route.stations() {
            stations.push(self.registry.resolve(id)?);
        }

        debug!(
            %source,
            %target,
            distance = route.total_distance(),
            stops = stations.len(),
            "path found"
        );

        Ok(FoundPath {
            stations,
            distance: route.total_distance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::{Distance, Line, Section};

    fn sid(raw: u64) -> StationId {
        StationId::new(raw).unwrap()
    }

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(sid(up), sid(down), Distance::new(distance).unwrap()).unwrap()
    }

    /// Mock registry over a fixed station set.
    struct MockRegistry {
        stations: HashMap<StationId, Station>,
    }

    impl MockRegistry {
        fn new(entries: &[(u64, &str)]) -> Self {
            let stations = entries
                .iter()
                .map(|&(id, name)| (sid(id), Station::new(sid(id), name)))
                .collect();
            Self { stations }
        }
    }

    impl StationRegistry for MockRegistry {
        fn resolve(&self, id: StationId) -> Result<Station, PathError> {
            self.stations
                .get(&id)
                .cloned()
                .ok_or(PathError::StationNotFound(id))
        }
    }

    /// Mock catalog that counts how often it is read.
    struct MockCatalog {
        lines: Vec<Line>,
        reads: AtomicUsize,
    }

    impl MockCatalog {
        fn new(lines: Vec<Line>) -> Self {
            Self {
                lines,
                reads: AtomicUsize::new(0),
            }
        }

        fn read_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl LineCatalog for MockCatalog {
        fn lines(&self) -> Vec<Line> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.lines.clone()
        }
    }

    /// The registry and catalog from the reference scenario: stations
    /// 강남역=1, 양재역=2, 방배역=3, 사당역=4; one line 1->2 (10) and a
    /// disconnected line 3->4 (5).
    fn scenario() -> (MockRegistry, MockCatalog) {
        let registry = MockRegistry::new(&[
            (1, "강남역"),
            (2, "양재역"),
            (3, "방배역"),
            (4, "사당역"),
        ]);
        let catalog = MockCatalog::new(vec![
            Line::new("신분당선", "red", vec![section(1, 2, 10)]),
            Line::new("2호선", "green", vec![section(3, 4, 5)]),
        ]);
        (registry, catalog)
    }

    #[test]
    fn finds_a_direct_path() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        let path = service.find_path(sid(1), sid(2)).unwrap();
        let names: Vec<_> = path.stations().iter().map(Station::name).collect();

        assert_eq!(names, vec!["강남역", "양재역"]);
        assert_eq!(path.distance(), 10);
    }

    #[test]
    fn disconnected_stations_fail_with_no_path() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        assert_eq!(
            service.find_path(sid(1), sid(3)),
            Err(PathError::NoPathFound {
                source: sid(1),
                target: sid(3),
            })
        );
    }

    #[test]
    fn same_source_and_target_fail_with_duplicate() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        assert_eq!(
            service.find_path(sid(2), sid(2)),
            Err(PathError::DuplicateStation(sid(2)))
        );
    }

    #[test]
    fn duplicate_check_runs_before_the_catalog_is_read() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        let _ = service.find_path(sid(2), sid(2));
        assert_eq!(catalog.read_count(), 0);
    }

    #[test]
    fn unknown_station_fails_regardless_of_the_other_id() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        assert_eq!(
            service.find_path(sid(1), sid(99)),
            Err(PathError::StationNotFound(sid(99)))
        );
        assert_eq!(
            service.find_path(sid(99), sid(1)),
            Err(PathError::StationNotFound(sid(99)))
        );
        // Both unknown: the source is reported
        assert_eq!(
            service.find_path(sid(98), sid(99)),
            Err(PathError::StationNotFound(sid(98)))
        );
    }

    #[test]
    fn parallel_lines_use_the_cheaper_section() {
        let registry = MockRegistry::new(&[(1, "강남역"), (2, "양재역")]);
        let catalog = MockCatalog::new(vec![
            Line::new("신분당선", "red", vec![section(1, 2, 10)]),
            Line::new("2호선", "green", vec![section(1, 2, 3)]),
        ]);
        let service = PathService::new(&registry, &catalog);

        let path = service.find_path(sid(1), sid(2)).unwrap();
        assert_eq!(path.distance(), 3);
    }

    #[test]
    fn transfers_across_lines() {
        let registry = MockRegistry::new(&[(1, "교대역"), (2, "강남역"), (5, "양재역")]);
        let catalog = MockCatalog::new(vec![
            Line::new("2호선", "green", vec![section(1, 2, 11)]),
            Line::new("신분당선", "red", vec![section(2, 5, 10)]),
        ]);
        let service = PathService::new(&registry, &catalog);

        let path = service.find_path(sid(1), sid(5)).unwrap();
        let names: Vec<_> = path.stations().iter().map(Station::name).collect();

        assert_eq!(names, vec!["교대역", "강남역", "양재역"]);
        assert_eq!(path.distance(), 21);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let (registry, catalog) = scenario();
        let service = PathService::new(&registry, &catalog);

        let first = service.find_path(sid(1), sid(2)).unwrap();
        let second = service.find_path(sid(1), sid(2)).unwrap();
        assert_eq!(first, second);
        // Each query builds from a fresh snapshot
        assert_eq!(catalog.read_count(), 2);
    }

    #[test]
    fn empty_catalog_fails_with_no_path() {
        let registry = MockRegistry::new(&[(1, "강남역"), (2, "양재역")]);
        let catalog = MockCatalog::new(vec![]);
        let service = PathService::new(&registry, &catalog);

        assert!(matches!(
            service.find_path(sid(1), sid(2)),
            Err(PathError::NoPathFound { .. })
        ));
    }

    #[test]
    fn works_over_the_in_memory_store() {
        use crate::network::sample_network;

        let store = sample_network();
        let service = PathService::new(&store, &store);

        // 강남역(2) -> 매봉역(6): via 양재역(5) on 신분당선 then 3호선,
        // 10 + 2, beating the 2호선/3호선 detour through 교대역
        let path = service.find_path(sid(2), sid(6)).unwrap();
        let names: Vec<_> = path.stations().iter().map(Station::name).collect();

        assert_eq!(names, vec!["강남역", "양재역", "매봉역"]);
        assert_eq!(path.distance(), 12);
    }
}
