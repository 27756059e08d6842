use nids_channel::FeedStatus;

use serde::Serialize;

/// Status of every dashboard feed
#[derive(Debug, Serialize)]
pub struct FeedListResponse {
    pub feeds: Vec<FeedStatus>,
}
