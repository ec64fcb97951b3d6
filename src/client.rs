//! Game-side client for the skins API.
//!
//! Methods never return errors. Failures are logged or recorded in
//! [`ClientState::error`], and the method hands back an empty result, so
//! callers check [`SkinsClient::error`] after each call.

use std::sync::{PoisonError, RwLock, RwLockWriteGuard};

use crate::config;
use crate::game::build_cards;
use crate::models::{CacheInfoResponse, GameCard, Skin, SkinsResponse};

/// Observable state owned by one [`SkinsClient`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub loading: bool,
    pub error: Option<String>,
    pub skins: Vec<Skin>,
}

/// Clears `loading` when dropped, including when the request future is
/// cancelled mid-flight.
struct LoadingGuard<'a> {
    state: &'a RwLock<ClientState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a RwLock<ClientState>) -> Self {
        let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
        guard.loading = true;
        guard.error = None;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
    }
}

pub struct SkinsClient {
    http: reqwest::Client,
    base_url: String,
    state: RwLock<ClientState>,
}

impl SkinsClient {
    /// Create a client for the game server at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            state: RwLock::new(ClientState::default()),
        }
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, ClientState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> ClientState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state().error
    }

    pub fn skins(&self) -> Vec<Skin> {
        self.state().skins
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the server for `count` random skins.
    ///
    /// On success the skins are stored and returned. Otherwise the error is
    /// stored and an empty list is returned.
    pub async fn fetch_random_skins(&self, count: i64) -> Vec<Skin> {
        let loading = LoadingGuard::start(&self.state);
        let result = self.request_skins(count).await;
        drop(loading);

        let mut state = self.state_mut();
        match result {
            Ok(SkinsResponse {
                success: true,
                data: Some(skins),
                ..
            }) => {
                state.skins = skins.clone();
                skins
            }
            Ok(resp) => {
                state.error = Some(
                    resp.error
                        .unwrap_or_else(|| "Failed to fetch skins".to_string()),
                );
                Vec::new()
            }
            Err(e) => {
                state.error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    async fn request_skins(&self, count: i64) -> reqwest::Result<SkinsResponse> {
        self.http
            .get(self.url("/api/csgo-skins"))
            .query(&[("count", count)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Drop the server-side catalog cache. Failures are only logged.
    pub async fn clear_cache(&self) {
        if let Err(e) = self.request_clear().await {
            tracing::warn!(error = %e, "failed to clear cache");
        }
    }

    /// Fetch the server's cache listing, or `None` if the request failed.
    pub async fn get_cache_info(&self) -> Option<CacheInfoResponse> {
        match self.request_cache_info().await {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(error = %e, "failed to get cache info");
                None
            }
        }
    }

    async fn request_clear(&self) -> reqwest::Result<()> {
        self.http
            .delete(self.url("/api/cache"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn request_cache_info(&self) -> reqwest::Result<CacheInfoResponse> {
        self.http
            .get(self.url("/api/cache"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Deal a shuffled deck of pairs from the first `pair_count` skins.
    pub fn transform_skins_for_game(&self, skins: &[Skin], pair_count: usize) -> Vec<GameCard> {
        build_cards(skins, pair_count, &mut rand::thread_rng())
    }

    /// [`transform_skins_for_game`](Self::transform_skins_for_game) with the
    /// default of eight pairs.
    pub fn deal_default(&self, skins: &[Skin]) -> Vec<GameCard> {
        self.transform_skins_for_game(skins, config::DEFAULT_PAIR_COUNT)
    }
}
