//! Axum router construction for the device API.
//!
//! Every request lands on one fallback handler; the request core decides
//! which document answers it. The router only adds transport concerns:
//! request tracing and a cap on requests in flight. No layer answers a
//! request on its own, so preflight `OPTIONS` requests reach the core too.

use std::sync::Arc;

use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the device API.
///
/// `max_in_flight` caps how many requests are processed at once; the
/// device default of 1 serves each request to completion before the
/// next. Values below 1 are raised to 1.
pub fn build_router(state: Arc<AppState>, max_in_flight: usize) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(ConcurrencyLimitLayer::new(max_in_flight.max(1)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
