//! HTTP adapter.
//!
//! One purge endpoint behind an optional bearer token, plus a liveness
//! route. The handler is a thin wrapper over [`purge::run`]; all policy
//! lives in the core module.

use crate::config::PurgeConfig;
use crate::core::{CollectionReport, PurgeError};
use crate::purge;
use crate::store::DocumentStore;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub purge: Arc<PurgeConfig>,
    /// Expected bearer token; `None` leaves the endpoint ungated.
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub success: bool,
    pub total_deleted: usize,
    pub collections: Vec<CollectionReport>,
}

#[derive(Debug)]
pub enum WebError {
    Unauthorized,
    Purge(PurgeError),
}

impl From<PurgeError> for WebError {
    fn from(err: PurgeError) -> Self {
        WebError::Purge(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Unauthorized => (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "success": false,
                    "message": "invalid bearer token",
                })),
            )
                .into_response(),
            WebError::Purge(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "error": err.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn purge_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PurgeResponse>, WebError> {
    if let Some(expected) = &state.token {
        if bearer_token(&headers) != Some(expected.as_str()) {
            return Err(WebError::Unauthorized);
        }
    }

    let report = purge::run(state.store.as_ref(), &state.purge).await?;
    tracing::info!(total = report.total_deleted, "purge run finished");

    Ok(Json(PurgeResponse {
        success: true,
        total_deleted: report.total_deleted,
        collections: report.collections,
    }))
}

async fn health() -> &'static str {
    "document purge service running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/purge", post(purge_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state)).await
}
