//! Route graph and shortest path engine.
//!
//! This module implements the core routing computation: building a
//! weighted directed multigraph from a line snapshot, and running
//! Dijkstra's algorithm over it to find the minimum-distance route
//! between two stations.

mod dijkstra;
mod graph;

pub use dijkstra::{Route, shortest_route};
pub use graph::{Edge, RouteGraph};
