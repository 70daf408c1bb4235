use super::types::{InferenceCall, InferenceResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Executes a prepared [`InferenceCall`] against a generation backend.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn execute(&self, call: InferenceCall) -> Result<InferenceResponse>;
}

pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl InferenceBackend for HttpBackend {
    async fn execute(&self, call: InferenceCall) -> Result<InferenceResponse> {
        debug!("Sending {} {} ({} bytes)", call.method, call.url, call.body.len());

        let response = self
            .client
            .request(call.method, call.url)
            .headers(call.headers)
            .body(call.body)
            .send()
            .await
            .map_err(Error::BackendUnavailable)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inference backend responded with status {}", status);
        }

        let body = response.bytes().await.map_err(Error::BackendUnavailable)?;
        debug!("Received {} bytes from inference backend", body.len());

        serde_json::from_slice::<InferenceResponse>(&body).map_err(|e| {
            Error::backend_protocol(format!("undecodable reply (status {status}): {e}"))
        })
    }
}
