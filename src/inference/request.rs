use super::types::{InferenceCall, InferencePayload};
use crate::{Error, Result, config::InferenceConfig};
use reqwest::{
    Method, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};

/// Builds the outbound generate request for `prompt` without sending it.
pub fn build_inference_call(config: &InferenceConfig, prompt: &str) -> Result<InferenceCall> {
    let payload = InferencePayload {
        model: config.model.clone(),
        prompt: prompt.to_string(),
        stream: config.stream,
    };
    let body = serde_json::to_vec(&payload).map_err(Error::Encoding)?;

    let url = Url::parse(&config.url)
        .map_err(|e| Error::config(format!("invalid inference url '{}': {}", config.url, e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(InferenceCall {
        method: Method::POST,
        url,
        headers,
        body,
    })
}
