//! The set of live feeds the service keeps up to date.

use crate::dashboard::feed_names::{ALERTS, ATTACKS, HEALTH, INTERFACES, SEVERITY_TREND, TRAFFIC};
use crate::{FeedSnapshot, ServerError, ServerErrorResult};

use nids_channel::{AppendPolicy, ApplyOutcome, ChannelHub, FeedSink, FeedStatus, LiveFeed, UpsertPolicy};
use nids_config::FeedConfig;
use nids_core::{
    Alert, AttackLog, HealthSnapshot, InterfaceStatus, SeverityCount, TrafficLog, channels,
};
use nids_feed::{BoundedFeed, merge};

use futures::future::select_all;
use log::{info, warn};

pub struct Dashboard {
    feeds: Vec<Box<dyn FeedSink>>,
    // First feed polled by the next wait; advances past whichever feed won
    next_start: usize,
}

impl Dashboard {
    /// Build every dashboard feed, inactive, sized from config
    pub fn new(config: &FeedConfig) -> ServerErrorResult<Self> {
        let feeds: Vec<Box<dyn FeedSink>> = vec![
            Box::new(
                LiveFeed::new(
                    ALERTS,
                    channels::ALERT,
                    BoundedFeed::<Alert>::new(config.alert_capacity)?,
                    AppendPolicy,
                )
                .with_notifier(notify_alert),
            ),
            Box::new(LiveFeed::new(
                TRAFFIC,
                channels::TRAFFIC,
                BoundedFeed::<TrafficLog>::new(config.traffic_capacity)?,
                AppendPolicy,
            )),
            Box::new(LiveFeed::new(
                ATTACKS,
                channels::ATTACK,
                BoundedFeed::<AttackLog>::new(config.attack_capacity)?,
                AppendPolicy,
            )),
            Box::new(LiveFeed::new(
                HEALTH,
                channels::HEALTH_UPDATE,
                BoundedFeed::<HealthSnapshot>::new(config.health_capacity)?,
                AppendPolicy,
            )),
            Box::new(LiveFeed::new(
                INTERFACES,
                channels::INTERFACE_UPDATE,
                BoundedFeed::<InterfaceStatus>::new(config.interface_capacity)?,
                UpsertPolicy::new(merge::last_write_wins::<InterfaceStatus>),
            )),
            Box::new(LiveFeed::new(
                SEVERITY_TREND,
                channels::SEVERITY_TREND,
                BoundedFeed::<SeverityCount>::new(config.severity_trend_days)?,
                UpsertPolicy::new(merge::accumulate::<SeverityCount>),
            )),
        ];

        Ok(Self {
            feeds,
            next_start: 0,
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.feeds.iter().map(|feed| feed.name()).collect()
    }

    pub fn activate_all(&mut self, hub: &ChannelHub) -> ServerErrorResult<()> {
        for feed in &mut self.feeds {
            feed.activate(hub)?;
        }
        info!("Activated {} dashboard feeds", self.feeds.len());
        Ok(())
    }

    pub fn deactivate_all(&mut self) {
        for feed in &mut self.feeds {
            feed.deactivate();
        }
        info!("Deactivated all dashboard feeds");
    }

    pub fn activate(&mut self, name: &str, hub: &ChannelHub) -> ServerErrorResult<FeedStatus> {
        let feed = self.feed_mut(name)?;
        feed.activate(hub)?;
        Ok(feed.status())
    }

    pub fn deactivate(&mut self, name: &str) -> ServerErrorResult<FeedStatus> {
        let feed = self.feed_mut(name)?;
        // Apply what was delivered before the request, then stop listening
        feed.pump();
        feed.deactivate();
        Ok(feed.status())
    }

    /// Status of every feed, after applying pending messages
    pub fn statuses(&mut self) -> Vec<FeedStatus> {
        self.feeds
            .iter_mut()
            .map(|feed| {
                feed.pump();
                feed.status()
            })
            .collect()
    }

    pub fn snapshot(&mut self, name: &str) -> ServerErrorResult<FeedSnapshot> {
        let feed = self.feed_mut(name)?;
        feed.pump();

        let status = feed.status();
        Ok(FeedSnapshot {
            feed: status.name,
            channel: status.channel,
            active: status.active,
            capacity: status.capacity,
            items: feed.snapshot_json()?,
        })
    }

    /// Wait until any active feed receives a message and apply it.
    /// Never resolves while no feed is active.
    ///
    /// Polling starts one past the feed that won the previous wait, so a
    /// busy feed cannot starve the feeds listed after it.
    pub async fn next_message(&mut self) -> (String, Option<ApplyOutcome>) {
        let count = self.feeds.len();
        let start = self.next_start % count.max(1);
        let (head, tail) = self.feeds.split_at_mut(start);

        let waiting: Vec<_> = tail
            .iter_mut()
            .enumerate()
            .map(|(offset, feed)| (start + offset, feed))
            .chain(head.iter_mut().enumerate())
            .filter(|(_, feed)| feed.is_active())
            .map(|(index, feed)| Box::pin(async move { (index, feed.recv().await) }))
            .collect();

        if waiting.is_empty() {
            return std::future::pending().await;
        }

        let ((index, outcome), _, _) = select_all(waiting).await;
        self.next_start = (index + 1) % count;
        (self.feeds[index].name().to_string(), outcome)
    }

    fn feed_mut(&mut self, name: &str) -> ServerErrorResult<&mut Box<dyn FeedSink>> {
        self.feeds
            .iter_mut()
            .find(|feed| feed.name() == name)
            .ok_or_else(|| ServerError::unknown_feed(name))
    }
}

/// Surface alerts an operator should act on
fn notify_alert(alert: &Alert) {
    if alert.severity.is_actionable() {
        warn!(
            "{} alert {}: {} -> {} ({}) {}",
            alert.severity,
            alert.signature,
            alert.source_ip,
            alert.destination_ip,
            alert.protocol,
            alert.message
        );
    }
}
