//! HTTP surface: the catalog endpoint and the cache admin endpoint.

pub mod error;
pub mod routes;

use std::sync::{Arc, Mutex};

use axum::routing::{any, get};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::SkinCatalog;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Cached access to the upstream catalog.
    pub catalog: SkinCatalog,

    /// Randomness for sampling. Seeded from entropy unless a fixed seed is
    /// configured for reproducible rounds.
    pub rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(catalog: SkinCatalog) -> Self {
        Self {
            catalog,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(catalog: SkinCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/csgo-skins", get(routes::skins::get_skins))
        .route("/api/cache", any(routes::cache::cache))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on an already-bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on http://{addr}");
    }
    axum::serve(listener, router(state)).await
}
