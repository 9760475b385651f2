//! Station registry and line/section catalog.
//!
//! The path query core consumes two narrow interfaces: a station
//! registry (lookup by id) and a line catalog (snapshot of all lines).
//! This module provides those seams plus the in-memory store that
//! implements both, and a seed-file format for bootstrapping it.

mod seed;
mod store;

pub use seed::{NetworkFile, SeedError, load_network, sample_network};
pub use store::{LineCatalog, NetworkError, NetworkStore, StationRegistry};
