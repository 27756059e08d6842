use crate::{
    ApplyOutcome, ChannelHub, FeedPolicy, FeedStats, LiveFeed, Result as ChannelErrorResult,
};

use nids_core::Validate;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Point-in-time description of a live feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedStatus {
    pub name: String,
    pub channel: String,
    pub policy: &'static str,
    pub active: bool,
    pub len: usize,
    pub capacity: usize,
    pub stats: FeedStats,
}

/// Type-erased live feed, so one owner can drive feeds of different record types
#[async_trait]
pub trait FeedSink: Send {
    fn name(&self) -> &str;

    fn channel(&self) -> &str;

    fn is_active(&self) -> bool;

    fn activate(&mut self, hub: &ChannelHub) -> ChannelErrorResult<()>;

    fn deactivate(&mut self);

    fn pump(&mut self) -> usize;

    async fn recv(&mut self) -> Option<ApplyOutcome>;

    fn status(&self) -> FeedStatus;

    /// Current contents as a JSON array, oldest-first
    fn snapshot_json(&self) -> ChannelErrorResult<serde_json::Value>;
}

#[async_trait]
impl<T, P> FeedSink for LiveFeed<T, P>
where
    T: DeserializeOwned + Serialize + Validate + Send,
    P: FeedPolicy<T>,
{
    fn name(&self) -> &str {
        LiveFeed::name(self)
    }

    fn channel(&self) -> &str {
        LiveFeed::channel(self)
    }

    fn is_active(&self) -> bool {
        LiveFeed::is_active(self)
    }

    fn activate(&mut self, hub: &ChannelHub) -> ChannelErrorResult<()> {
        LiveFeed::activate(self, hub)
    }

    fn deactivate(&mut self) {
        LiveFeed::deactivate(self)
    }

    fn pump(&mut self) -> usize {
        LiveFeed::pump(self)
    }

    async fn recv(&mut self) -> Option<ApplyOutcome> {
        LiveFeed::recv(self).await
    }

    fn status(&self) -> FeedStatus {
        FeedStatus {
            name: self.name().to_string(),
            channel: self.channel().to_string(),
            policy: self.policy_kind(),
            active: LiveFeed::is_active(self),
            len: self.feed().len(),
            capacity: self.feed().capacity(),
            stats: self.stats(),
        }
    }

    fn snapshot_json(&self) -> ChannelErrorResult<serde_json::Value> {
        let items: Vec<&T> = self.feed().iter().collect();
        Ok(serde_json::to_value(items)?)
    }
}
