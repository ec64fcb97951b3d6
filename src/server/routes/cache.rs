use std::sync::Arc;

use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Json, Response};

use crate::models::{CacheInfoResponse, ClearCacheResponse};
use crate::server::error::AppError;
use crate::server::AppState;

/// GET | DELETE /api/cache
///
/// `GET` lists the cached entries, `DELETE` drops them all. Any other verb
/// is answered with a bare 405.
pub async fn cache(
    State(state): State<Arc<AppState>>,
    method: Method,
) -> Result<Response, AppError> {
    let store = state.catalog.cache();

    match method {
        Method::DELETE => {
            store.clear_all();
            tracing::info!("skins cache cleared");
            Ok(Json(ClearCacheResponse {
                success: true,
                message: "Cache cleared successfully".to_string(),
            })
            .into_response())
        }
        Method::GET => {
            let entries = store.list_entries();
            let total_keys = entries.len();
            Ok(Json(CacheInfoResponse {
                success: true,
                cache: entries,
                total_keys,
            })
            .into_response())
        }
        other => {
            tracing::debug!(method = %other, "rejected cache admin request");
            Err(AppError::method_not_allowed())
        }
    }
}
