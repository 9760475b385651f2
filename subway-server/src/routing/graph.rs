//! Route graph construction.

use std::collections::BTreeMap;

use crate::domain::{Line, StationId};

/// A directed edge to a neighboring station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    to: StationId,
    weight: u32,
}

impl Edge {
    /// Returns the station this edge leads to.
    pub fn to(&self) -> StationId {
        self.to
    }

    /// Returns the edge weight (section distance).
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// A weighted directed multigraph of stations.
///
/// Built fresh from a catalog snapshot for each query and discarded
/// afterwards; never mutated once built. Parallel edges between the same
/// ordered pair of stations (from different lines, or a line and its
/// reverse counterpart) are all retained. The engine selects the
/// cheapest during relaxation, not the builder.
///
/// Adjacency is kept in a `BTreeMap` and edges in catalog order, so
/// traversal order is a pure function of the catalog contents.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: BTreeMap<StationId, Vec<Edge>>,
}

impl RouteGraph {
    /// Build a graph from a line snapshot.
    ///
    /// Every station a line touches becomes a vertex (inserting an
    /// already-present vertex is a no-op), and every section becomes one
    /// edge from its up station to its down station.
    pub fn build(lines: &[Line]) -> Self {
        let mut graph = RouteGraph::default();

        for line in lines {
            for id in line.station_ids() {
                graph.adjacency.entry(id).or_default();
            }
            for section in line.sections() {
                graph.adjacency.entry(section.up()).or_default().push(Edge {
                    to: section.down(),
                    weight: section.distance().get(),
                });
            }
        }

        graph
    }

    /// Whether this station is a vertex of the graph.
    pub fn contains(&self, id: StationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Outgoing edges of a vertex, in catalog order.
    ///
    /// Returns an empty slice for a station that is not a vertex.
    pub fn edges_from(&self, id: StationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
