//! In-process, time-bounded cache for the skins catalog.
//!
//! The catalog lives under one constant key. Entries carry the Unix
//! millisecond timestamp they were written at; freshness is decided by the
//! reader against a TTL, never stored. [`CacheStore`] is the seam for swapping
//! in an external key-value store.

use crate::models::{CacheEntryInfo, Skin};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// CacheEntry
// ---------------------------------------------------------------------------

/// A cached catalog and the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub skins: Arc<Vec<Skin>>,
    pub timestamp: u64,
}

impl CacheEntry {
    pub fn new(skins: Arc<Vec<Skin>>, timestamp: u64) -> Self {
        Self { skins, timestamp }
    }

    /// Milliseconds elapsed between the write and `now_ms`.
    pub fn age_millis_at(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    /// `true` while `now_ms - timestamp < ttl`.
    pub fn is_fresh_at(&self, now_ms: u64, ttl: Duration) -> bool {
        u128::from(self.age_millis_at(now_ms)) < ttl.as_millis()
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.is_fresh_at(now_millis(), ttl)
    }

    pub fn item_count(&self) -> usize {
        self.skins.len()
    }

    /// Describe this entry for the cache admin endpoint.
    pub fn info_at(&self, key: &str, now_ms: u64) -> CacheEntryInfo {
        CacheEntryInfo {
            key: key.to_string(),
            timestamp: self.timestamp,
            item_count: self.item_count(),
            age_minutes: self.age_millis_at(now_ms) / 60_000,
        }
    }
}

// ---------------------------------------------------------------------------
// CacheStore
// ---------------------------------------------------------------------------

/// Storage backend for cached catalogs.
///
/// Lookups do not enforce expiry; callers check [`CacheEntry::is_fresh`].
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Store `skins` under `key` stamped with the current time, replacing
    /// any previous entry. Returns the stored entry.
    fn set(&self, key: &str, skins: Arc<Vec<Skin>>) -> CacheEntry;

    /// Drop every entry.
    fn clear_all(&self);

    fn list_entries(&self) -> Vec<CacheEntryInfo>;

    fn len(&self) -> usize {
        self.list_entries().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// MemoryCache
// ---------------------------------------------------------------------------

/// Process-local [`CacheStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry with an explicit timestamp.
    pub fn insert_at(&self, key: &str, skins: Arc<Vec<Skin>>, timestamp: u64) -> CacheEntry {
        let entry = CacheEntry::new(skins, timestamp);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry.clone());
        entry
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, skins: Arc<Vec<Skin>>) -> CacheEntry {
        self.insert_at(key, skins, now_millis())
    }

    fn clear_all(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn list_entries(&self) -> Vec<CacheEntryInfo> {
        let now = now_millis();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut infos: Vec<CacheEntryInfo> = entries
            .iter()
            .map(|(key, entry)| entry.info_at(key, now))
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
