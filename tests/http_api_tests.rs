use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use docpurge::config::{CollectionTarget, PurgeConfig};
use docpurge::core::{DocumentId, StoreError};
use docpurge::store::{DocumentStore, InMemoryStore};
use docpurge::web::{AppState, router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Store whose fetches always fail, for exercising the 500 path.
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list_ids(
        &self,
        _collection: &str,
        _limit: usize,
    ) -> Result<Vec<DocumentId>, StoreError> {
        Err(StoreError::Remote {
            status: 503,
            message: "backend unavailable".to_string(),
        })
    }

    async fn delete_batch(
        &self,
        _collection: &str,
        _ids: &[DocumentId],
    ) -> Result<(), StoreError> {
        Ok(())
    }
}

fn purge_config(total_limit: usize) -> PurgeConfig {
    PurgeConfig {
        total_limit,
        collections: vec![CollectionTarget {
            name: "events".to_string(),
            collection: "analytics_events".to_string(),
        }],
    }
}

fn state(store: Arc<dyn DocumentStore>, total_limit: usize, token: Option<&str>) -> AppState {
    AppState {
        store,
        purge: Arc::new(purge_config(total_limit)),
        token: token.map(str::to_string),
    }
}

fn purge_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri("/purge");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

async fn decode_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

#[tokio::test]
async fn purge_requires_a_matching_bearer_token() {
    let store = Arc::new(InMemoryStore::new());
    let app = router(state(store, 100, Some("secret")));

    let missing = app.clone().oneshot(purge_request(None)).await.unwrap();
    assert_eq!(missing.status(), StatusCode::FORBIDDEN);
    let body = decode_json(missing).await;
    assert_eq!(body.get("success").and_then(Value::as_bool), Some(false));

    let wrong = app.oneshot(purge_request(Some("guess"))).await.unwrap();
    assert_eq!(wrong.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn purge_with_a_valid_token_reports_deletions() {
    let store = Arc::new(InMemoryStore::new());
    store.seed("analytics_events", 120).await;
    let app = router(state(store.clone(), 1000, Some("secret")));

    let response = app
        .clone()
        .oneshot(purge_request(Some("secret")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = decode_json(response).await;
    assert_eq!(body.get("success").and_then(Value::as_bool), Some(true));
    assert_eq!(body.get("total_deleted").and_then(Value::as_u64), Some(120));
    let collections = body
        .get("collections")
        .and_then(Value::as_array)
        .expect("collections array");
    assert_eq!(collections[0].get("name").and_then(Value::as_str), Some("events"));
    assert_eq!(collections[0].get("deleted").and_then(Value::as_u64), Some(120));
    assert_eq!(store.count("analytics_events").await, 0);

    // A second run over the emptied collection succeeds and deletes nothing.
    let rerun = app.oneshot(purge_request(Some("secret"))).await.unwrap();
    assert_eq!(rerun.status(), StatusCode::OK);
    let body = decode_json(rerun).await;
    assert_eq!(body.get("total_deleted").and_then(Value::as_u64), Some(0));
}

#[tokio::test]
async fn purge_respects_the_configured_limit() {
    let store = Arc::new(InMemoryStore::new());
    store.seed("analytics_events", 120).await;
    let app = router(state(store.clone(), 50, Some("secret")));

    let response = app.oneshot(purge_request(Some("secret"))).await.unwrap();
    let body = decode_json(response).await;
    assert_eq!(body.get("total_deleted").and_then(Value::as_u64), Some(50));
    assert_eq!(store.count("analytics_events").await, 70);
}

#[tokio::test]
async fn purge_without_a_configured_token_is_open() {
    let store = Arc::new(InMemoryStore::new());
    store.seed("analytics_events", 5).await;
    let app = router(state(store, 100, None));

    let response = app.oneshot(purge_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = decode_json(response).await;
    assert_eq!(body.get("total_deleted").and_then(Value::as_u64), Some(5));
}

#[tokio::test]
async fn store_failures_map_to_internal_errors() {
    let app = router(state(Arc::new(FailingStore), 100, None));

    let response = app.oneshot(purge_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = decode_json(response).await;
    assert_eq!(body.get("success").and_then(Value::as_bool), Some(false));
    let error = body.get("error").and_then(Value::as_str).expect("error field");
    assert!(error.contains("analytics_events"));
    // The partial count is not part of the error body.
    assert!(body.get("total_deleted").is_none());
}

#[tokio::test]
async fn health_route_is_always_available() {
    let app = router(state(Arc::new(FailingStore), 100, Some("secret")));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
