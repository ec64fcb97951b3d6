//! Shared test fixtures for the skins integration tests.
//!
//! Provides a small sample catalog and a fake upstream server that serves it
//! from `127.0.0.1` on an ephemeral port, counting every request it answers.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use cs2_skin_memory::models::Skin;
use cs2_skin_memory::server::{self, AppState};
use cs2_skin_memory::SkinCatalog;
use serde_json::{json, Value};
use tokio::net::TcpListener;

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// A minimal skin record: only the required fields plus an image.
pub fn skin_json(id: &str, weapon: &str, image: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{weapon} | {id}"),
        "weapon": { "id": weapon, "name": weapon },
        "image": image,
    })
}

pub fn skin(id: &str, weapon: &str, image: &str) -> Skin {
    serde_json::from_value(skin_json(id, weapon, image)).unwrap()
}

/// Seven skins over six weapons. Two have no usable image, leaving five
/// usable skins across four weapons (two of them AK-47s).
pub fn sample_catalog_json() -> Value {
    json!([
        {
            "id": "skin-ak-redline",
            "name": "AK-47 | Redline",
            "description": "It has been painted using a carbon fiber hydrographic.",
            "weapon": { "id": "weapon_ak47", "weapon_id": 7, "name": "AK-47" },
            "category": { "id": "sfui_invpanel_filter_rifle", "name": "Rifles" },
            "pattern": { "id": "redline", "name": "Redline" },
            "min_float": 0.1,
            "max_float": 0.7,
            "rarity": { "id": "rarity_legendary_weapon", "name": "Classified", "color": "#d32ce6" },
            "stattrak": true,
            "souvenir": false,
            "paint_index": "282",
            "team": { "id": "terrorists", "name": "Terrorist" },
            "crates": [
                { "id": "crate-4001", "name": "CS:GO Weapon Case 2", "image": "https://img.example/crate-4001.png" }
            ],
            "collections": [
                { "id": "collection-set-community-1", "name": "The Phoenix Collection", "image": "https://img.example/phoenix.png" }
            ],
            "image": "https://img.example/ak-redline.png"
        },
        {
            "id": "skin-ak-vulcan",
            "name": "AK-47 | Vulcan",
            "description": null,
            "weapon": { "id": "weapon_ak47", "name": "AK-47" },
            "category": null,
            "pattern": null,
            "min_float": null,
            "max_float": null,
            "rarity": { "id": "rarity_ancient_weapon", "name": "Covert", "color": "#eb4b4b" },
            "stattrak": true,
            "souvenir": false,
            "team": null,
            "crates": [],
            "collections": [],
            "image": "https://img.example/ak-vulcan.png"
        },
        skin_json("skin-awp-asiimov", "weapon_awp", "https://img.example/awp-asiimov.png"),
        skin_json("skin-m4a4-howl", "weapon_m4a1", "https://img.example/m4a4-howl.png"),
        skin_json("skin-deagle-blaze", "weapon_deagle", "https://img.example/deagle-blaze.png"),
        skin_json("skin-glock-fade", "weapon_glock", ""),
        {
            "id": "skin-usp-orion",
            "name": "USP-S | Orion",
            "weapon": { "id": "weapon_usp_silencer", "name": "USP-S" },
            "image": null
        }
    ])
}

pub fn sample_catalog() -> Vec<Skin> {
    serde_json::from_value(sample_catalog_json()).unwrap()
}

pub const SAMPLE_TOTAL: usize = 7;
pub const SAMPLE_USABLE: usize = 5;
pub const SAMPLE_WEAPONS: usize = 4;

// ---------------------------------------------------------------------------
// Fake upstream
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct UpstreamState {
    status: Arc<AtomicU16>,
    body: Arc<Mutex<String>>,
    hits: Arc<AtomicUsize>,
    delay: Duration,
}

/// Handle to a running fake of the upstream `skins.json` host.
pub struct Upstream {
    pub addr: SocketAddr,
    state: UpstreamState,
}

impl Upstream {
    /// Base URL to configure the catalog with; `/skins.json` is appended.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/en", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn set_status(&self, status: StatusCode) {
        self.state.status.store(status.as_u16(), Ordering::SeqCst);
    }

    pub fn set_body(&self, body: impl Into<String>) {
        *self.state.body.lock().unwrap() = body.into();
    }

    pub fn catalog(&self) -> SkinCatalog {
        SkinCatalog::builder()
            .base_url(self.base_url())
            .build()
            .unwrap()
    }
}

async fn serve_skins(State(state): State<UpstreamState>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    let status = StatusCode::from_u16(state.status.load(Ordering::SeqCst)).unwrap();
    let body = state.body.lock().unwrap().clone();
    (status, body)
}

pub async fn spawn_upstream_with(status: StatusCode, body: String, delay: Duration) -> Upstream {
    let state = UpstreamState {
        status: Arc::new(AtomicU16::new(status.as_u16())),
        body: Arc::new(Mutex::new(body)),
        hits: Arc::new(AtomicUsize::new(0)),
        delay,
    };

    let app = Router::new()
        .route("/api/en/skins.json", get(serve_skins))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream { addr, state }
}

/// Fake upstream serving [`sample_catalog_json`] with HTTP 200.
pub async fn spawn_upstream() -> Upstream {
    spawn_upstream_with(
        StatusCode::OK,
        sample_catalog_json().to_string(),
        Duration::ZERO,
    )
    .await
}

/// Fake upstream answering every request with `status` and `body`.
pub async fn spawn_failing_upstream(status: StatusCode, body: &str) -> Upstream {
    spawn_upstream_with(status, body.to_string(), Duration::ZERO).await
}

// ---------------------------------------------------------------------------
// Game server
// ---------------------------------------------------------------------------

pub fn app_state(catalog: SkinCatalog) -> Arc<AppState> {
    Arc::new(AppState::with_seed(catalog, 42))
}

/// Run the full API on an ephemeral port and return its base URL.
pub async fn spawn_app(catalog: SkinCatalog) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = app_state(catalog);
    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });
    format!("http://{addr}")
}
