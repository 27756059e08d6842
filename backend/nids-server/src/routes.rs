use crate::{
    AppState, activate_feed, admin, deactivate_feed, get_feed, health, list_feeds, publish_record,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Producers
        .route("/api/v1/channels/{channel}", post(publish_record))
        // Dashboard feeds
        .route("/api/v1/feeds", get(list_feeds))
        .route("/api/v1/feeds/{feed}", get(get_feed))
        .route("/api/v1/feeds/{feed}/activate", post(activate_feed))
        .route("/api/v1/feeds/{feed}/deactivate", post(deactivate_feed))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Admin endpoints
        .route("/admin/shutdown", post(admin::shutdown_handler))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
