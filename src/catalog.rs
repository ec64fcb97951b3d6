//! Get-cached-or-fetch access to the full skins catalog.

use crate::cache::{CacheEntry, CacheStore, MemoryCache};
use crate::config;
use crate::error::Result;
use crate::fetcher::SkinFetcher;
use crate::models::Skin;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SkinCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SkinCatalog`].
///
/// Use [`SkinCatalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SkinCatalogBuilder::build).
pub struct SkinCatalogBuilder {
    base_url: String,
    ttl: Duration,
    timeout: Option<Duration>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl Default for SkinCatalogBuilder {
    fn default() -> Self {
        Self {
            base_url: config::CSGO_API_BASE.to_string(),
            ttl: config::CACHE_TTL,
            timeout: None,
            cache: None,
        }
    }
}

impl SkinCatalogBuilder {
    /// Set the upstream API base; `skins.json` is appended to it.
    ///
    /// Defaults to [`config::CSGO_API_BASE`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set how long a cached catalog stays valid. Defaults to one hour.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Bound each upstream request. Unbounded unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a specific cache store. A fresh [`MemoryCache`] is created otherwise.
    pub fn cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Result<SkinCatalog> {
        let fetcher = SkinFetcher::new(&self.base_url, self.timeout)?;
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryCache::new()) as Arc<dyn CacheStore>);
        Ok(SkinCatalog {
            fetcher,
            cache,
            ttl: self.ttl,
            refresh: tokio::sync::Mutex::new(()),
        })
    }
}

// ---------------------------------------------------------------------------
// SkinCatalog
// ---------------------------------------------------------------------------

/// The full catalog as served to one request.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub skins: Arc<Vec<Skin>>,
    /// When the backing cache entry was written (Unix ms).
    pub timestamp: u64,
    /// `true` when served from a still-valid cache entry, `false` when the
    /// catalog was fetched for this call.
    pub cached: bool,
}

impl CatalogSnapshot {
    fn from_entry(entry: CacheEntry, cached: bool) -> Self {
        Self {
            skins: entry.skins,
            timestamp: entry.timestamp,
            cached,
        }
    }
}

/// Fronts the upstream fetch with a single-key TTL cache.
///
/// Concurrent misses are coalesced: the refresh lock is held across the
/// fetch and waiters re-check the cache before fetching themselves.
pub struct SkinCatalog {
    fetcher: SkinFetcher,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
    refresh: tokio::sync::Mutex<()>,
}

impl SkinCatalog {
    pub fn builder() -> SkinCatalogBuilder {
        SkinCatalogBuilder::default()
    }

    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn fetcher(&self) -> &SkinFetcher {
        &self.fetcher
    }

    fn fresh_entry(&self) -> Option<CacheEntry> {
        self.cache
            .get(config::ALL_SKINS_CACHE_KEY)
            .filter(|entry| entry.is_fresh(self.ttl))
    }

    /// Return the cached catalog if still valid, otherwise fetch and cache it.
    ///
    /// On fetch failure the error is returned and the existing entry, stale
    /// or absent, is left as it was.
    pub async fn get_catalog(&self) -> Result<CatalogSnapshot> {
        if let Some(entry) = self.fresh_entry() {
            tracing::debug!(count = entry.item_count(), "skins catalog cache hit");
            return Ok(CatalogSnapshot::from_entry(entry, true));
        }

        let _guard = self.refresh.lock().await;
        if let Some(entry) = self.fresh_entry() {
            tracing::debug!("skins catalog refreshed by a concurrent request");
            return Ok(CatalogSnapshot::from_entry(entry, true));
        }

        tracing::debug!("skins catalog cache miss");
        let skins = self.fetcher.fetch_all().await?;
        let entry = self.cache.set(config::ALL_SKINS_CACHE_KEY, Arc::new(skins));
        Ok(CatalogSnapshot::from_entry(entry, false))
    }
}
