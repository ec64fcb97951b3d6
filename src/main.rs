use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use cs2_skin_memory::server::{self, AppState};
use cs2_skin_memory::{config, init_tracing, SkinCatalog};

/// Serve random CS2 skins for the memory game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Settings {
    /// Address to listen on
    #[arg(long, env = "CS2_BIND_ADDR", default_value = config::DEFAULT_BIND_ADDR)]
    bind: String,

    /// Base URL of the upstream catalog API (`skins.json` is appended)
    #[arg(long, env = "CS2_SKINS_API_BASE", default_value = config::CSGO_API_BASE)]
    upstream: String,

    /// How long a fetched catalog stays cached
    #[arg(long, env = "CS2_CACHE_TTL_SECS", default_value_t = config::CACHE_TTL.as_secs())]
    cache_ttl_secs: u64,

    /// Upstream request timeout; unbounded when omitted
    #[arg(long, env = "CS2_UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: Option<u64>,

    /// Fixed RNG seed for reproducible samples
    #[arg(long, env = "CS2_SKINS_SEED")]
    seed: Option<u64>,

    #[arg(long, env = "CS2_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let settings = Settings::parse();
    init_tracing(&settings.log_level, settings.log_json);

    let mut builder = SkinCatalog::builder()
        .base_url(settings.upstream.clone())
        .ttl(Duration::from_secs(settings.cache_ttl_secs));
    if let Some(secs) = settings.upstream_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let catalog = match builder.build() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize skins catalog");
            return ExitCode::FAILURE;
        }
    };

    let state = match settings.seed {
        Some(seed) => AppState::with_seed(catalog, seed),
        None => AppState::new(catalog),
    };

    let listener = match tokio::net::TcpListener::bind(&settings.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %settings.bind, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server::serve(listener, Arc::new(state)).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
