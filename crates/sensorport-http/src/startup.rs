//! Background startup helper for embedding the server in another process.
//!
//! Provides [`spawn_server`], which binds eagerly and then serves on a
//! background Tokio task. Bind failures surface to the caller instead of
//! being logged from inside the task.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sensorport_http::startup::spawn_server;
//! use sensorport_http::{AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! let running = spawn_server(&ServerConfig::default(), Arc::new(state)).await?;
//! println!("listening on {}", running.addr);
//! running.shutdown().await;
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::server::{self, ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// A server running on a background task.
#[derive(Debug)]
pub struct RunningServer {
    /// The address actually bound (useful with port `0`).
    pub addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl RunningServer {
    /// Stop accepting connections, drain in-flight requests and wait for
    /// the task to finish.
    pub async fn shutdown(self) {
        // The task may already have exited; nothing to signal then.
        let _ = self.stop.send(());
        if let Err(e) = self.handle.await {
            tracing::error!(error = %e, "HTTP server task failed");
        }
    }
}

/// Bind the configured address and serve on a background Tokio task.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the address cannot be bound.
pub async fn spawn_server(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<RunningServer, StartupError> {
    let listener = server::bind(config).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no address: {e}")))?;

    let (stop, stopped) = oneshot::channel::<()>();
    let max_in_flight = config.max_in_flight;
    let handle = tokio::spawn(async move {
        let shutdown = async move {
            // A dropped sender also stops the server.
            let _ = stopped.await;
        };
        if let Err(e) = server::serve(listener, state, max_in_flight, shutdown).await {
            tracing::error!(error = %e, "HTTP server exited with error");
        }
    });

    tracing::info!(%addr, "HTTP server spawned on background task");

    Ok(RunningServer { addr, stop, handle })
}
