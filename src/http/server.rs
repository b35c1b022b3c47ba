//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Register `/html` only when the feature flag is on
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware,
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::EchoConfig;
use crate::echo::RequestInfoBuilder;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::{shutdown, signals};
use crate::observability::metrics::track_metrics;

/// Errors raised while constructing or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `features.json_content_type` is not a valid header value.
    #[error("invalid JSON content type {0:?}")]
    InvalidContentType(String),

    /// Accept loop failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<RequestInfoBuilder>,
    pub json_content_type: HeaderValue,
}

/// HTTP server for the echo service.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Result<Self, ServerError> {
        let json_content_type = HeaderValue::from_str(&config.features.json_content_type)
            .map_err(|_| ServerError::InvalidContentType(config.features.json_content_type.clone()))?;

        let state = AppState {
            builder: Arc::new(RequestInfoBuilder::new(config.identity.clone())),
            json_content_type,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EchoConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::info))
            .route("/health", get(handlers::health));

        if config.features.html_enabled {
            router = router.route("/html", get(handlers::html));
        }

        router
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %req.method(),
                            uri = %req.uri(),
                            request_id = %request_id(req.headers()),
                        )
                    }))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Run the server until an OS signal or `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            html_enabled = self.config.features.html_enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown::wait(shutdown_rx) => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_content_type() {
        let mut config = EchoConfig::default();
        config.features.json_content_type = "bad\r\nvalue".into();
        assert!(matches!(
            EchoServer::new(config),
            Err(ServerError::InvalidContentType(_))
        ));
    }

    #[test]
    fn test_keeps_config() {
        let mut config = EchoConfig::default();
        config.features.html_enabled = false;
        let server = EchoServer::new(config).unwrap();
        assert!(!server.config().features.html_enabled);
    }
}
