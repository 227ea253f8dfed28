//! HTTP server setup and route dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind the server to a listener with graceful shutdown
//! - Dispatch by path prefix: `/proxy/` to the forwarding core, `/api/` to
//!   the config endpoint, everything else to the static responder

use std::sync::Arc;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::api::{api_not_found, env_handler};
use crate::http::assets::asset_handler;
use crate::http::request::RequestIdLayer;
use crate::proxy::error::SetupError;
use crate::proxy::handler::proxy_handler;
use crate::proxy::UpstreamFetcher;

/// Application state injected into handlers.
///
/// Everything here is immutable for the process lifetime; handlers share
/// it without locking.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: UpstreamFetcher,
    pub config: Arc<GatewayConfig>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, SetupError> {
        let fetcher = UpstreamFetcher::new(&config.upstream)?;
        let state = AppState {
            fetcher,
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/proxy/", any(proxy_handler))
            .route("/proxy/{*target}", any(proxy_handler))
            .route("/api/env", any(env_handler))
            .route("/api/", any(api_not_found))
            .route("/api/{*rest}", any(api_not_found))
            .fallback(asset_handler)
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
