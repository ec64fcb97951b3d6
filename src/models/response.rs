use serde::{Deserialize, Serialize};

use super::skin::Skin;

// ---------------------------------------------------------------------------
// SkinsResponse — Envelope of GET /api/csgo-skins
// ---------------------------------------------------------------------------

/// Success or failure envelope returned by the catalog endpoint.
///
/// Failures still travel with HTTP 200; callers inspect `success`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Skin>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_available: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SkinsResponse {
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Cache admin envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryInfo {
    pub key: String,
    pub timestamp: u64,
    pub item_count: usize,
    pub age_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInfoResponse {
    pub success: bool,
    pub cache: Vec<CacheEntryInfo>,
    pub total_keys: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: String,
}
