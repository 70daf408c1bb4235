use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid client input: {0}")]
    ClientInput(#[source] serde_json::Error),

    #[error("Failed to encode inference payload: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Inference backend unavailable: {0}")]
    BackendUnavailable(#[source] reqwest::Error),

    #[error("Inference backend protocol error: {0}")]
    BackendProtocol(String),

    #[error("Authentication failed")]
    Authentication,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn backend_protocol(msg: impl Into<String>) -> Self {
        Self::BackendProtocol(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status reported to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ClientInput(_) => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short phrase written to the client. Never carries internal detail.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::ClientInput(_) => "Invalid flashcard request\n",
            Self::Authentication => "Authentication failed. Invalid token\n",
            Self::MethodNotAllowed => "Method not accepted\n",
            _ => "Flashcard could not be generated\n",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed with {}: {}", status, self);
        } else {
            warn!("Request rejected with {}: {}", status, self);
        }

        (status, self.client_message()).into_response()
    }
}
