//! Cross-cutting request wrappers applied around the whole router.
//!
//! A [`Chain`] is an ordered list of [`Middleware`]s. The first entry is the
//! outermost layer: it sees the request first and the response last.

use crate::{Error, config::AuthConfig};
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};
use std::sync::Arc;
use tracing::info;

/// Header carrying the caller's token.
pub const TOKEN_HEADER: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Middleware {
    /// Logs method and path, then always forwards.
    Logger,
    /// Rejects with 401 unless the token header equals `token`.
    Authenticator { token: Arc<str> },
}

impl Middleware {
    fn wrap(&self, router: Router) -> Router {
        match self {
            Self::Logger => router.layer(middleware::from_fn(log_request)),
            Self::Authenticator { token } => {
                router.layer(middleware::from_fn_with_state(token.clone(), authenticate))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Chain {
    middlewares: Vec<Middleware>,
}

impl Chain {
    pub fn new(middlewares: Vec<Middleware>) -> Self {
        Self { middlewares }
    }

    /// Logger outermost, followed by the authenticator when enabled, so
    /// rejected requests are still logged.
    pub fn from_config(auth: &AuthConfig) -> Self {
        let mut middlewares = vec![Middleware::Logger];
        if auth.enabled {
            middlewares.push(Middleware::Authenticator {
                token: Arc::from(auth.token.as_str()),
            });
        }
        Self::new(middlewares)
    }

    pub fn middlewares(&self) -> &[Middleware] {
        &self.middlewares
    }

    pub fn apply(&self, router: Router) -> Router {
        // Router::layer makes the most recent layer outermost, so fold from the back.
        self.middlewares
            .iter()
            .rev()
            .fold(router, |router, middleware| middleware.wrap(router))
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    info!("{} {}", req.method(), req.uri().path());
    next.run(req).await
}

async fn authenticate(
    State(expected): State<Arc<str>>,
    req: Request,
    next: Next,
) -> Result<Response, Error> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if token != Some(&*expected) {
        return Err(Error::Authentication);
    }

    Ok(next.run(req).await)
}
