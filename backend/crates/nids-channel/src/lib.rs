pub mod apply_outcome;
pub mod channel_hub;
pub mod channel_message;
pub mod channel_subscription;
pub mod error;
pub mod feed_policy;
pub mod feed_sink;
pub mod feed_stats;
pub mod hub_config;
pub mod live_feed;
pub mod metrics;

pub use apply_outcome::ApplyOutcome;
pub use channel_hub::{ChannelHub, validate_channel_name};
pub use channel_message::ChannelMessage;
pub use channel_subscription::ChannelSubscription;
pub use error::{ChannelError, Result};
pub use feed_policy::{AppendPolicy, FeedPolicy, UpsertPolicy};
pub use feed_sink::{FeedSink, FeedStatus};
pub use feed_stats::FeedStats;
pub use hub_config::HubConfig;
pub use live_feed::LiveFeed;
pub use metrics::Metrics;

#[cfg(test)]
mod tests;
