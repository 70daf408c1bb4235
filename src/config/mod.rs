mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

/// Reads a YAML config file, falling back to defaults when it does not exist.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config = match tokio::fs::read_to_string(path).await {
        Ok(config_str) => serde_yaml::from_str::<Config>(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} not found, using default configuration", path.display());
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.validate()?;
    Ok(config)
}
