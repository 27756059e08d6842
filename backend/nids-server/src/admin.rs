//! Administrative endpoints for server management.

use crate::AppState;

use axum::{extract::State, http::StatusCode};
use log::info;

/// POST /admin/shutdown
///
/// Triggers the same graceful shutdown as SIGINT: the dashboard actor
/// deactivates its feeds and the HTTP server drains.
pub async fn shutdown_handler(State(state): State<AppState>) -> StatusCode {
    info!("Graceful shutdown requested via HTTP");
    state.shutdown.shutdown();

    StatusCode::ACCEPTED
}
