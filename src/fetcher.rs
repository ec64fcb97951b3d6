//! Download of the upstream skins catalog.

use crate::config;
use crate::error::{SkinsError, Result};
use crate::models::Skin;
use reqwest::Client;
use std::time::Duration;

/// Performs the single outbound GET for `skins.json`.
///
/// No retries: a failed attempt is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct SkinFetcher {
    client: Client,
    url: String,
}

impl SkinFetcher {
    /// Create a fetcher for `{base_url}/skins.json`.
    ///
    /// `timeout` bounds the whole request; `None` leaves it unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        reqwest::Url::parse(base_url).map_err(|e| {
            SkinsError::InvalidArgument(format!("invalid upstream base URL '{}': {}", base_url, e))
        })?;

        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: config::skins_url(base_url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the full catalog.
    pub async fn fetch_all(&self) -> Result<Vec<Skin>> {
        tracing::info!(url = %self.url, "fetching skins catalog");
        let result = self.fetch_inner().await;
        match &result {
            Ok(skins) => tracing::info!(count = skins.len(), "skins catalog fetched"),
            Err(e) => tracing::error!(url = %self.url, error = %e, "error fetching CS:GO skins"),
        }
        result
    }

    async fn fetch_inner(&self) -> Result<Vec<Skin>> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SkinsError::Status(status));
        }
        // Read the body first so malformed JSON surfaces as a parse error
        // rather than a reqwest decode error.
        let bytes = resp.bytes().await?;
        let skins: Vec<Skin> = serde_json::from_slice(&bytes)?;
        Ok(skins)
    }
}
