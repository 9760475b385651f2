//! Web layer for the subway route server.
//!
//! Provides HTTP endpoints for registering stations and lines and for
//! querying shortest paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
