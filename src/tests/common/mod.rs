// Common test utilities and helpers

use crate::AppState;
use crate::handlers;
use crate::services::llm::{CredentialSource, ProviderConfig, StudyAdvisor, build_provider};
use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

pub const MINIMAX_PATH: &str = "/v1/text/chatcompletion_v2";

/// Router backed by a MiniMax adapter pointed at the mock server
pub fn minimax_app(server: &MockServer, credential: &str) -> Router {
    let config =
        ProviderConfig::minimax().with_endpoint(format!("{}{}", server.uri(), MINIMAX_PATH));
    let provider = build_provider(config, CredentialSource::Static(credential.to_string()))
        .expect("Failed to build provider");
    handlers::router(Arc::new(AppState::new(StudyAdvisor::new(provider))))
}

/// Router whose provider has no credential, so every AI call falls back
/// without touching the network
pub fn offline_app() -> Router {
    let provider = build_provider(ProviderConfig::minimax(), CredentialSource::Static(String::new()))
        .expect("Failed to build provider");
    handlers::router(Arc::new(AppState::new(StudyAdvisor::new(provider))))
}

/// Send one request and return status plus parsed JSON body
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    match body {
        Some(json) => send_raw(app, method, uri, json.to_string()).await,
        None => {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to create test request");
            into_parts(app, request).await
        },
    }
}

/// Send a raw `application/json` body, which need not be valid JSON
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("Failed to create test request");
    into_parts(app, request).await
}

async fn into_parts(app: Router, request: Request) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("Failed to make request");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };

    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, None).await
}
