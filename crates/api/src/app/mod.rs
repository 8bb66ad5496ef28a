//! HTTP API application wiring (Axum router + server startup).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use anyhow::Context;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::config::ServerConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router.
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::cors_middleware)))
}

/// Bind `config`'s address and serve until the listener fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "Backend server running on port {}", config.port);

    axum::serve(listener, build_app())
        .await
        .context("server terminated")
}
