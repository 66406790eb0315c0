// Integration tests for `InventoryStore` cache behavior, with wiremock
// counting the actual outbound requests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spooldash_core::{FetchError, FilamentId, InventoryStore, MaterialId};

// ── Helpers ─────────────────────────────────────────────────────────

fn store_for(server: &MockServer, window: Duration) -> InventoryStore {
    let base_url = Url::parse(&server.uri()).unwrap();
    let client =
        spooldash_api::SimplyPrintClient::from_reqwest(&base_url, "123", reqwest::Client::new())
            .unwrap();
    InventoryStore::with_client(client, window)
}

fn filament_body() -> serde_json::Value {
    json!({
        "filament": {
            "7": {
                "id": 7,
                "uid": "a1b2c3",
                "type": { "id": 3 },
                "colorName": "Galaxy Black",
                "total": 330_000,
                "left": 204_600,
                "dia": 1.75
            }
        }
    })
}

fn material_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": 3,
                "brand": { "name": "Prusament" },
                "material_type_name": "PLA",
                "filament_type_name": "PLA Matte",
                "density": 1.24
            }
        ]
    })
}

/// Mount both endpoints, each expecting exactly `hits` requests over the
/// test. The expectations are verified when the server drops.
async fn mount_endpoints(server: &MockServer, hits: u64) {
    Mock::given(method("GET"))
        .and(path("/123/filament/type/Get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(material_body()))
        .expect(hits)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/123/filament/GetFilament"))
        .respond_with(ResponseTemplate::new(200).set_body_json(filament_body()))
        .expect(hits)
        .mount(server)
        .await;
}

// ── Cache contract ──────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_populates_snapshot() {
    let server = MockServer::start().await;
    mount_endpoints(&server, 1).await;
    let store = store_for(&server, Duration::from_secs(3600));

    let snap = store.refresh().await.unwrap();

    assert_eq!(snap.materials.len(), 1);
    assert_eq!(snap.filaments.len(), 1);
    assert_eq!(
        snap.filaments[&FilamentId(7)].material_id,
        MaterialId(3)
    );
    assert!(snap.materials.contains_key(&MaterialId(3)));
}

#[tokio::test]
async fn test_second_refresh_within_window_hits_cache() {
    let server = MockServer::start().await;
    // One request pair total: the second call must not reach the server.
    mount_endpoints(&server, 1).await;
    let store = store_for(&server, Duration::from_secs(3600));

    let first = store.refresh().await.unwrap();
    let second = store.refresh().await.unwrap();

    // Bit-identical: same timestamp, same shared maps.
    assert_eq!(first.fetched_at, second.fetched_at);
    assert!(Arc::ptr_eq(&first.materials, &second.materials));
    assert!(Arc::ptr_eq(&first.filaments, &second.filaments));
}

#[tokio::test]
async fn test_refresh_after_window_fetches_again() {
    let server = MockServer::start().await;
    // Exactly two request pairs: one per refresh.
    mount_endpoints(&server, 2).await;
    let store = store_for(&server, Duration::from_millis(50));

    let first = store.refresh().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let second = store.refresh().await.unwrap();

    assert!(second.fetched_at > first.fetched_at);
}

#[tokio::test]
async fn test_zero_window_disables_caching() {
    let server = MockServer::start().await;
    mount_endpoints(&server, 2).await;
    let store = store_for(&server, Duration::ZERO);

    store.refresh().await.unwrap();
    store.refresh().await.unwrap();
}

// ── Failure handling ────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let store = store_for(&server, Duration::from_secs(3600));

    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 500 }));
    assert!(store.last_snapshot().await.is_none());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let server = MockServer::start().await;

    // Each endpoint answers once, then the server starts failing.
    Mock::given(method("GET"))
        .and(path("/123/filament/type/Get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(material_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/123/filament/GetFilament"))
        .respond_with(ResponseTemplate::new(200).set_body_json(filament_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // Zero window so the second refresh really goes out.
    let store = store_for(&server, Duration::ZERO);

    let first = store.refresh().await.unwrap();
    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 503 }));

    // The slot still holds the successful snapshot.
    let kept = store.last_snapshot().await.unwrap();
    assert_eq!(kept.fetched_at, first.fetched_at);
    assert_eq!(kept.filaments.len(), 1);
    assert!(store.data_age().await.is_some());
}
