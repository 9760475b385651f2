//! Shortest path engine.
//!
//! Dijkstra's algorithm with a binary-heap frontier over non-negative
//! section distances. The graph is a multigraph: relaxation visits every
//! parallel edge between a pair of stations and the cheapest one wins.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::debug;

use crate::domain::{PathError, StationId};

use super::graph::RouteGraph;

/// A computed route: the ordered station sequence and the summed
/// distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
    total_distance: u64,
}

impl Route {
    /// Returns the stations from source to target, inclusive.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the sum of traversed edge weights.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }
}

/// Compute the minimum-distance route from `start` to `end`.
///
/// The total distance is always the unique minimum over all routes. The
/// station sequence is deterministic for a fixed graph: the frontier
/// orders equal distances by station id, and relaxation replaces a
/// predecessor only on strict improvement, so among equal-cost routes
/// the one settling smaller ids earlier is returned.
///
/// # Errors
///
/// Fails with [`PathError::NoPathFound`] when either station is absent
/// from the graph's vertex set, or when the two stations lie in disjoint
/// components.
pub fn shortest_route(
    graph: &RouteGraph,
    start: StationId,
    end: StationId,
) -> Result<Route, PathError> {
    let no_path = || PathError::NoPathFound {
        source: start,
        target: end,
    };

    if !graph.contains(start) || !graph.contains(end) {
        return Err(no_path());
    }

    let mut dist: BTreeMap<StationId, u64> = BTreeMap::new();
    let mut prev: BTreeMap<StationId, StationId> = BTreeMap::new();
    let mut frontier: BinaryHeap<Reverse<(u64, StationId)>> = BinaryHeap::new();

    dist.insert(start, 0);
    frontier.push(Reverse((0, start)));

    let mut settled = 0usize;

    while let Some(Reverse((distance, station))) = frontier.pop() {
        if distance > dist.get(&station).copied().unwrap_or(u64::MAX) {
            continue; // stale frontier entry
        }
        settled += 1;

        if station == end {
            break;
        }

        for edge in graph.edges_from(station) {
            let candidate = distance + u64::from(edge.weight());
            let best = dist.get(&edge.to()).copied().unwrap_or(u64::MAX);

            // Strict improvement only: the cheapest of any parallel
            // edges wins, and an equal-cost alternative never displaces
            // a predecessor already chosen.
            if candidate < best {
                dist.insert(edge.to(), candidate);
                prev.insert(edge.to(), station);
                frontier.push(Reverse((candidate, edge.to())));
            }
        }
    }

    let Some(&total_distance) = dist.get(&end) else {
        return Err(no_path());
    };

    let mut stations = vec![end];
    let mut cursor = end;
    while cursor != start {
        // every reached station except start has a predecessor
        cursor = prev[&cursor];
        stations.push(cursor);
    }
    stations.reverse();

    debug!(%start, %end, total_distance, settled, "shortest route computed");

    Ok(Route {
        stations,
        total_distance,
    })
}
