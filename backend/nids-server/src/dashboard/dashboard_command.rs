use crate::{FeedSnapshot, ServerErrorResult};

use nids_channel::FeedStatus;

use tokio::sync::oneshot;

/// Requests served by the dashboard actor, each with its reply channel
#[derive(Debug)]
pub enum DashboardCommand {
    Snapshot {
        feed: String,
        reply: oneshot::Sender<ServerErrorResult<FeedSnapshot>>,
    },
    Feeds {
        reply: oneshot::Sender<Vec<FeedStatus>>,
    },
    Activate {
        feed: String,
        reply: oneshot::Sender<ServerErrorResult<FeedStatus>>,
    },
    Deactivate {
        feed: String,
        reply: oneshot::Sender<ServerErrorResult<FeedStatus>>,
    },
}

impl DashboardCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Snapshot { .. } => "snapshot",
            Self::Feeds { .. } => "feeds",
            Self::Activate { .. } => "activate",
            Self::Deactivate { .. } => "deactivate",
        }
    }
}
