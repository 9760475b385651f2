//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The station registry and line catalog
    pub store: Arc<NetworkStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: NetworkStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
