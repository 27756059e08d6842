//! Feed REST API handlers
//!
//! Read-only snapshots of the dashboard feeds, plus activation control.

use crate::{ApiResult, AppState, FeedListResponse, FeedSnapshot};

use nids_channel::FeedStatus;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/feeds
///
/// Status of every feed
pub async fn list_feeds(State(state): State<AppState>) -> ApiResult<Json<FeedListResponse>> {
    let feeds = state.dashboard.feeds().await?;

    Ok(Json(FeedListResponse { feeds }))
}

/// GET /api/v1/feeds/{feed}
///
/// Current contents of one feed, oldest-first
pub async fn get_feed(
    State(state): State<AppState>,
    Path(feed): Path<String>,
) -> ApiResult<Json<FeedSnapshot>> {
    let snapshot = state.dashboard.snapshot(&feed).await?;

    Ok(Json(snapshot))
}

/// POST /api/v1/feeds/{feed}/activate
pub async fn activate_feed(
    State(state): State<AppState>,
    Path(feed): Path<String>,
) -> ApiResult<Json<FeedStatus>> {
    let status = state.dashboard.activate(&feed).await?;
    log::info!("Feed {} activated via API", feed);

    Ok(Json(status))
}

/// POST /api/v1/feeds/{feed}/deactivate
pub async fn deactivate_feed(
    State(state): State<AppState>,
    Path(feed): Path<String>,
) -> ApiResult<Json<FeedStatus>> {
    let status = state.dashboard.deactivate(&feed).await?;
    log::info!("Feed {} deactivated via API", feed);

    Ok(Json(status))
}
