use crate::{DashboardCommand, FeedSnapshot, ServerError, ServerErrorResult};

use nids_channel::FeedStatus;

use tokio::sync::{mpsc, oneshot};

/// Cloneable client of the dashboard actor
#[derive(Clone)]
pub struct DashboardHandle {
    commands: mpsc::Sender<DashboardCommand>,
}

impl DashboardHandle {
    pub(crate) fn new(commands: mpsc::Sender<DashboardCommand>) -> Self {
        Self { commands }
    }

    /// Current contents of one feed
    pub async fn snapshot(&self, feed: &str) -> ServerErrorResult<FeedSnapshot> {
        self.request(|reply| DashboardCommand::Snapshot {
            feed: feed.to_string(),
            reply,
        })
        .await?
    }

    /// Status of every feed
    pub async fn feeds(&self) -> ServerErrorResult<Vec<FeedStatus>> {
        self.request(|reply| DashboardCommand::Feeds { reply }).await
    }

    pub async fn activate(&self, feed: &str) -> ServerErrorResult<FeedStatus> {
        self.request(|reply| DashboardCommand::Activate {
            feed: feed.to_string(),
            reply,
        })
        .await?
    }

    pub async fn deactivate(&self, feed: &str) -> ServerErrorResult<FeedStatus> {
        self.request(|reply| DashboardCommand::Deactivate {
            feed: feed.to_string(),
            reply,
        })
        .await?
    }

    /// False once the actor has stopped
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    async fn request<R>(
        &self,
        command: impl FnOnce(oneshot::Sender<R>) -> DashboardCommand,
    ) -> ServerErrorResult<R> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(command(reply))
            .await
            .map_err(|_| ServerError::dashboard_closed())?;

        response.await.map_err(|_| ServerError::dashboard_closed())
    }
}
