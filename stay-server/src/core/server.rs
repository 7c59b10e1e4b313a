//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;

        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        crate::api::health::mark_started();
        let app = build_app().with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!(
            environment = %self.config.environment,
            "🏨 Stay Server listening on {}",
            addr
        );

        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        let shutdown = async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down (timeout {:?})...", timeout);
        };

        let serve = axum::serve(listener, app).with_graceful_shutdown(shutdown);

        // Graceful shutdown waits for in-flight requests; cap it at the configured budget
        tokio::select! {
            result = serve.into_future() => {
                result.map_err(|e| ServerError::Internal(e.into()))?;
            }
            _ = async {
                let _ = tokio::signal::ctrl_c().await;
                tokio::time::sleep(timeout).await;
            } => {
                tracing::warn!("Graceful shutdown timed out, forcing exit");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
