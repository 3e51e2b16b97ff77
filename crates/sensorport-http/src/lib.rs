//! HTTP adapter for the Sensorport device API.
//!
//! This crate puts the request core from `sensorport-core` behind an Axum
//! server. It owns nothing but transport concerns:
//!
//! - **Framing** -- turning an [`ApiResponse`] into status, headers
//!   (`Content-Type`, `Location`) and body bytes
//! - **Routing** -- a single fallback handler; route selection is the
//!   core's job, so unknown paths and methods never produce a 404/405
//! - **Lifecycle** -- binding, serving, graceful shutdown on `Ctrl-C`,
//!   and a background-task helper for embedding
//!
//! [`ApiResponse`]: sensorport_core::ApiResponse

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use startup::{RunningServer, StartupError, spawn_server};
pub use state::AppState;
