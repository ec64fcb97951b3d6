use std::sync::{Arc, PoisonError};

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::config;
use crate::game::sample_diverse;
use crate::models::SkinsResponse;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct SkinsParams {
    pub count: Option<String>,
}

/// Parse the `count` query value by its leading integer (`"12abc"` is 12).
///
/// Absent or non-numeric input falls back to the default count.
pub fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return config::DEFAULT_SKIN_COUNT;
    };

    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => config::DEFAULT_SKIN_COUNT,
    }
}

/// GET /api/csgo-skins?count=10
///
/// Returns a weapon-diverse random sample of the cached catalog. Upstream
/// failures are reported in the envelope with HTTP 200. A query string that
/// does not deserialize (e.g. a repeated `count`) uses the default count.
pub async fn get_skins(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SkinsParams>, QueryRejection>,
) -> Json<SkinsResponse> {
    let raw_count = match &params {
        Ok(Query(params)) => params.count.as_deref(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string, using default count");
            None
        }
    };
    let requested = parse_count(raw_count);

    let snapshot = match state.catalog.get_catalog().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(error = %e, "skins API error");
            return Json(SkinsResponse::failure(
                config::FETCH_ERROR_LABEL,
                e.to_string(),
            ));
        }
    };

    let count = usize::try_from(requested).unwrap_or(0);
    let data = {
        let mut rng = state.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_diverse(&snapshot.skins, count, &mut *rng)
    };

    let returned = data.len();
    Json(SkinsResponse {
        success: true,
        data: Some(data),
        cached: Some(snapshot.cached),
        timestamp: Some(snapshot.timestamp),
        total_available: Some(snapshot.skins.len()),
        requested_count: Some(requested),
        returned_count: Some(returned),
        error: None,
        message: None,
    })
}
