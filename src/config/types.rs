use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Token check applied in front of every route when enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_token")]
    pub token: String,
}

/// Where and how prompts are sent for generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_inference_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub stream: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.inference.url).map_err(|e| {
            Error::config(format!(
                "invalid inference url '{}': {}",
                self.inference.url, e
            ))
        })?;

        if self.inference.model.trim().is_empty() {
            return Err(Error::config("inference model must not be empty"));
        }

        if self.inference.timeout_secs == 0 {
            return Err(Error::config("inference timeout_secs must be greater than zero"));
        }

        if self.server.auth.enabled && self.server.auth.token.is_empty() {
            return Err(Error::config("auth is enabled but no token is configured"));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            token: default_token(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: default_inference_url(),
            model: default_model(),
            stream: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_token() -> String {
    "bearer".to_string()
}

fn default_inference_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_model() -> String {
    "schroneko/gemma-2-2b-jpn-it:latest".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}
