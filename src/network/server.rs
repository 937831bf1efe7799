//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::repository::InventoryRepository;

use super::routes::create_router;

/// HTTP server for the inventory
pub struct HttpServer {
    config: Config,
    repo: InventoryRepository,
}

impl HttpServer {
    /// Create a new server with the given config and repository
    pub fn new(config: Config, repo: InventoryRepository) -> Self {
        Self { config, repo }
    }

    /// The router this server will serve
    pub fn router(&self) -> Router {
        create_router(self.repo.clone(), self.config.body_limit_bytes)
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server drained");
        Ok(())
    }
}

/// Resolves on Ctrl+C
///
/// If the signal handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
