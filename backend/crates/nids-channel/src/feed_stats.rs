use serde::Serialize;

/// Running counters for one live feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub applied: u64,
    pub rejected: u64,
    pub missed: u64,
}
