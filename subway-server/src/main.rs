use std::net::SocketAddr;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::network::{load_network, sample_network};
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Build the store from the configured seed file, or fall back to the
    // built-in sample network.
    let store = match std::env::var("SUBWAY_NETWORK") {
        Ok(path) => load_network(Path::new(&path)).expect("Failed to load network seed file"),
        Err(_) => {
            info!("SUBWAY_NETWORK not set, using the built-in sample network");
            sample_network()
        }
    };
    info!(
        stations = store.station_count(),
        lines = store.line_count(),
        "network loaded"
    );

    let state = AppState::new(store);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("SUBWAY_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!(%addr, "subway route server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
