use super::types::CreateRequest;
use crate::{
    Error, Result,
    config::InferenceConfig,
    flashcard::build_prompt,
    inference::{InferenceBackend, build_inference_call},
};
use axum::{
    body::{self, Body},
    extract::{Request, State},
};
use std::sync::Arc;
use tracing::{debug, info};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn InferenceBackend>,
    pub inference: Arc<InferenceConfig>,
}

impl AppState {
    pub fn new(backend: Arc<dyn InferenceBackend>, inference: InferenceConfig) -> Self {
        Self {
            backend,
            inference: Arc::new(inference),
        }
    }
}

pub async fn home() -> &'static str {
    "Home\n"
}

pub async fn flashcard_root() -> &'static str {
    "Flashcard root\n"
}

pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

/// Generates a flashcard for the posted word and relays the backend's text.
pub async fn create_flashcard(State(state): State<AppState>, request: Request) -> Result<String> {
    let body = read_body(request.into_body()).await?;
    let request: CreateRequest = serde_json::from_slice(&body).map_err(Error::ClientInput)?;

    info!("Generating flashcard for word: {}", request.word);

    let prompt = build_prompt(&request.word);
    let call = build_inference_call(&state.inference, &prompt)?;
    let response = state.backend.execute(call).await?;

    debug!(
        "Flashcard generated for {} ({} bytes)",
        request.word,
        response.response.len()
    );

    Ok(response.response)
}

// Exceeding MAX_BODY_BYTES surfaces as a read failure, so oversized bodies get
// 500 like any other unreadable body rather than 413.
async fn read_body(body: Body) -> Result<body::Bytes> {
    body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| Error::internal(format!("failed to read request body: {e}")))
}
