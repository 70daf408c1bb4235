use anyhow::Result;
use flashcard_server::{config, server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .json()
        .init();

    info!("Starting flashcard server with log level: {}", log_level);
    info!(
        "Inference backend: {} (model: {}, stream: {}, timeout: {}s)",
        config.inference.url,
        config.inference.model,
        config.inference.stream,
        config.inference.timeout_secs
    );
    if config.server.auth.enabled {
        info!("Token authentication enabled on all routes");
    } else {
        warn!("Token authentication disabled");
    }

    server::run(config).await?;

    Ok(())
}
