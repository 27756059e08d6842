pub mod admin;
pub mod api;
pub mod app_state;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    channels::{channels::publish_record, publish_response::PublishResponse},
    error::{ApiError, Result as ApiResult},
    feeds::{
        feed_list_response::FeedListResponse,
        feeds::{activate_feed, deactivate_feed, get_feed, list_feeds},
    },
};
pub use app_state::AppState;
pub use dashboard::{
    dashboard::Dashboard, dashboard_actor::DashboardActor, dashboard_command::DashboardCommand,
    dashboard_handle::DashboardHandle, feed_snapshot::FeedSnapshot,
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

use tracing::info_span;

/// Create a tracing span for an inbound publish request.
pub fn create_publish_span(channel: &str, bytes: usize) -> tracing::Span {
    info_span!("publish_request", channel = %channel, bytes = bytes)
}
