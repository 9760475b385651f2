//! Domain types for the subway network.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod line;
mod station;

pub use error::PathError;
pub use line::{Distance, InvalidDistance, InvalidSection, Line, Section};
pub use station::{InvalidStationId, Station, StationId};
