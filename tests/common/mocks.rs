use async_trait::async_trait;
use flashcard_server::{
    Error, Result,
    inference::{InferenceBackend, InferenceCall, InferenceResponse},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Malformed,
}

/// Mock inference backend that records every call it receives
#[derive(Debug)]
pub struct MockBackend {
    pub calls: Arc<Mutex<Vec<InferenceCall>>>,
    pub reply: MockReply,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_response("{}")
    }

    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: MockReply::Text(text.into()),
        }
    }

    pub fn malformed() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: MockReply::Malformed,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<InferenceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn execute(&self, call: InferenceCall) -> Result<InferenceResponse> {
        self.calls.lock().unwrap().push(call);

        match &self.reply {
            MockReply::Text(text) => Ok(InferenceResponse {
                response: text.clone(),
            }),
            MockReply::Malformed => Err(Error::backend_protocol("mock backend returned garbage")),
        }
    }
}
