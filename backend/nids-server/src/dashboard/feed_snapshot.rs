use serde::Serialize;

/// Contents of one feed at the time of the request, oldest-first
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub feed: String,
    pub channel: String,
    pub active: bool,
    pub capacity: usize,
    pub items: serde_json::Value,
}
