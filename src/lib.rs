//! Backend for a CS2 skin memory-matching game.
//!
//! Fetches the public CSGO-API `skins.json` catalog, keeps it in an in-process
//! TTL cache, and serves weapon-diverse random samples of it over HTTP. The
//! [`client`] module is the game-side counterpart that turns a sample into a
//! shuffled deck of card pairs.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use cs2_skin_memory::server::{self, AppState};
//! use cs2_skin_memory::SkinCatalog;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = SkinCatalog::builder().build()?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! server::serve(listener, Arc::new(AppState::new(catalog))).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod game;
pub mod models;
pub mod server;

pub use cache::{CacheEntry, CacheStore, MemoryCache};
pub use catalog::{CatalogSnapshot, SkinCatalog, SkinCatalogBuilder};
pub use client::SkinsClient;
pub use error::{Result, SkinsError};
pub use fetcher::SkinFetcher;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. With `json` set, events are
/// written as JSON lines.
pub fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}
