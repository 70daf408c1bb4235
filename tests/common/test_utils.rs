use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use flashcard_server::{
    config::{AuthConfig, InferenceConfig},
    inference::InferenceBackend,
    server::{build_app, handlers::AppState},
};
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

pub const TEST_MODEL: &str = "test-model";

/// Inference config pointing at `url` with a short timeout
pub fn create_inference_config(url: &str) -> InferenceConfig {
    InferenceConfig {
        url: url.to_string(),
        model: TEST_MODEL.to_string(),
        stream: false,
        timeout_secs: 5,
    }
}

pub fn auth_enabled(token: &str) -> AuthConfig {
    AuthConfig {
        enabled: true,
        token: token.to_string(),
    }
}

/// Build the full application around any backend
pub fn create_test_app(
    backend: Arc<dyn InferenceBackend>,
    inference: InferenceConfig,
    auth: &AuthConfig,
) -> NormalizePath<Router> {
    build_app(AppState::new(backend, inference), auth)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
