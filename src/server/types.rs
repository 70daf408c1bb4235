use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub word: String,
}
