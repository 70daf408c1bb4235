pub mod handlers;
pub mod middleware;
mod types;

pub use types::CreateRequest;

use crate::{
    Result,
    config::{AuthConfig, Config},
    inference::HttpBackend,
};
use axum::{
    Router, ServiceExt,
    extract::Request,
    routing::{any, post},
};
use handlers::AppState;
use middleware::Chain;
use std::{net::SocketAddr, sync::Arc};
use tower_http::normalize_path::NormalizePath;
use tracing::info;

/// Mount prefix of the flashcard API.
pub const FLASHCARD_PREFIX: &str = "/api/flash_card";

/// Routes relative to [`FLASHCARD_PREFIX`].
pub fn flashcard_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::flashcard_root))
        .route(
            "/create",
            post(handlers::create_flashcard).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::flashcard_root)
        .with_state(state)
}

/// Top-level dispatcher wrapped in the middleware chain.
pub fn router(state: AppState, auth: &AuthConfig) -> Router {
    let router = Router::new()
        .route("/", any(handlers::home))
        .nest(FLASHCARD_PREFIX, flashcard_router(state))
        .fallback(handlers::home);

    Chain::from_config(auth).apply(router)
}

/// The complete service as served, with trailing slashes trimmed before routing.
pub fn build_app(state: AppState, auth: &AuthConfig) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router(state, auth))
}

pub async fn run(config: Config) -> Result<()> {
    let backend = HttpBackend::new(&config.inference)?;
    let state = AppState::new(Arc::new(backend), config.inference.clone());

    let app = build_app(state, &config.server.auth);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
