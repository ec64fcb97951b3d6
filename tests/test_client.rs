//! Game-side client against a running server and fake upstream.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use cs2_skin_memory::SkinsClient;

#[tokio::test]
async fn fetch_random_skins_stores_and_returns_sample() {
    let upstream = common::spawn_upstream().await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    let skins = client.fetch_random_skins(4).await;

    assert_eq!(skins.len(), 4);
    assert_eq!(client.skins(), skins);
    assert!(client.error().is_none());
    assert!(!client.loading());
}

#[tokio::test]
async fn upstream_failure_is_recorded_as_error() {
    let upstream = common::spawn_failing_upstream(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    let skins = client.fetch_random_skins(4).await;

    assert!(skins.is_empty());
    assert!(client.skins().is_empty());
    assert_eq!(client.error().as_deref(), Some("Failed to fetch CS:GO skins"));
    assert!(!client.loading());
}

#[tokio::test]
async fn error_is_cleared_by_next_successful_fetch() {
    let upstream = common::spawn_failing_upstream(StatusCode::BAD_GATEWAY, "").await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    client.fetch_random_skins(2).await;
    assert!(client.error().is_some());

    upstream.set_status(StatusCode::OK);
    upstream.set_body(common::sample_catalog_json().to_string());

    let skins = client.fetch_random_skins(2).await;
    assert_eq!(skins.len(), 2);
    assert!(client.error().is_none());
}

#[tokio::test]
async fn unreachable_server_is_recorded_as_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = SkinsClient::new(format!("http://{addr}"));

    let skins = client.fetch_random_skins(3).await;

    assert!(skins.is_empty());
    assert!(client.error().is_some_and(|e| !e.is_empty()));
    assert!(client.get_cache_info().await.is_none());
    // Only logged, never surfaced.
    client.clear_cache().await;
}

#[tokio::test]
async fn cache_info_and_clear_round_trip() {
    let upstream = common::spawn_upstream().await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    client.fetch_random_skins(3).await;
    let info = client.get_cache_info().await.unwrap();
    assert!(info.success);
    assert_eq!(info.total_keys, 1);
    assert_eq!(info.cache[0].item_count, common::SAMPLE_TOTAL);

    client.clear_cache().await;
    let info = client.get_cache_info().await.unwrap();
    assert_eq!(info.total_keys, 0);
    assert!(info.cache.is_empty());
}

#[tokio::test]
async fn fetched_skins_deal_into_pairs() {
    let upstream = common::spawn_upstream().await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    let skins = client.fetch_random_skins(10).await;
    assert_eq!(skins.len(), common::SAMPLE_USABLE);

    let cards = client.deal_default(&skins);
    assert_eq!(cards.len(), 2 * common::SAMPLE_USABLE);

    let cards = client.transform_skins_for_game(&skins, 2);
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(|c| !c.is_flipped && !c.is_matched));
}

#[tokio::test]
async fn cancelled_fetch_clears_loading() {
    let upstream = common::spawn_upstream_with(
        StatusCode::OK,
        common::sample_catalog_json().to_string(),
        Duration::from_secs(5),
    )
    .await;
    let base = common::spawn_app(upstream.catalog()).await;
    let client = SkinsClient::new(base);

    let outcome = tokio::time::timeout(Duration::from_millis(100), client.fetch_random_skins(3)).await;

    assert!(outcome.is_err(), "request should still be in flight");
    assert!(!client.loading());
    assert!(client.skins().is_empty());
}
