use reqwest::{Method, Url, header::HeaderMap};
use serde::{Deserialize, Serialize};

/// JSON body sent to the generate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferencePayload {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Generate endpoint reply. Only the generated text is kept; it is relayed
/// to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResponse {
    pub response: String,
}

/// A fully built outbound request that has not been sent yet.
#[derive(Debug, Clone)]
pub struct InferenceCall {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl InferenceCall {
    pub fn payload(&self) -> serde_json::Result<InferencePayload> {
        serde_json::from_slice(&self.body)
    }
}
