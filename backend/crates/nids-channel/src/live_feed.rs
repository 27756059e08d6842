use crate::{
    ApplyOutcome, ChannelError, ChannelHub, ChannelMessage, ChannelSubscription, FeedPolicy,
    FeedStats, Metrics, Result as ChannelErrorResult,
};

use nids_core::Validate;
use nids_feed::BoundedFeed;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

type Notifier<T> = Box<dyn FnMut(&T) + Send>;

/// A bounded feed bound to one named channel for as long as it is active.
///
/// Incoming payloads are decoded and validated before they reach the feed;
/// records that fail either step are logged, counted and dropped.
pub struct LiveFeed<T, P> {
    name: String,
    channel: String,
    feed: BoundedFeed<T>,
    policy: P,
    subscription: Option<ChannelSubscription>,
    notifier: Option<Notifier<T>>,
    stats: FeedStats,
    /// Missed counts carried over from earlier subscriptions
    missed_base: u64,
    metrics: Metrics,
}

impl<T, P> LiveFeed<T, P>
where
    T: DeserializeOwned + Validate + Send,
    P: FeedPolicy<T>,
{
    pub fn new(
        name: impl Into<String>,
        channel: impl Into<String>,
        feed: BoundedFeed<T>,
        policy: P,
    ) -> Self {
        Self {
            name: name.into(),
            channel: channel.into(),
            feed,
            policy,
            subscription: None,
            notifier: None,
            stats: FeedStats::default(),
            missed_base: 0,
            metrics: Metrics::new(),
        }
    }

    /// Run `notifier` on every record that passes validation
    pub fn with_notifier<F>(mut self, notifier: F) -> Self
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn policy_kind(&self) -> &'static str {
        self.policy.kind()
    }

    pub fn is_active(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ChannelSubscription::is_active)
    }

    /// Subscribe to the feed's channel. Already active feeds keep their
    /// existing subscription.
    #[track_caller]
    pub fn activate(&mut self, hub: &ChannelHub) -> ChannelErrorResult<()> {
        if self.is_active() {
            log::debug!("Feed {} already active on {}", self.name, self.channel);
            return Ok(());
        }

        // Fold in counters from a subscription the hub closed underneath us
        self.deactivate();
        self.subscription = Some(ChannelSubscription::activate(hub, &self.channel)?);
        log::info!("Feed {} activated on channel {}", self.name, self.channel);
        Ok(())
    }

    /// Unsubscribe. Safe to call any number of times.
    pub fn deactivate(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            self.missed_base += subscription.missed();
            self.stats.missed = self.missed_base;
            if subscription.deactivate() {
                log::info!("Feed {} deactivated on channel {}", self.name, self.channel);
            }
        }
    }

    /// Decode, validate and apply one message
    #[track_caller]
    pub fn apply_message(&mut self, message: &ChannelMessage) -> ApplyOutcome {
        match self.decode(message) {
            Ok(record) => self.apply_record(record),
            Err(error) => self.reject(error),
        }
    }

    /// Validate and apply an already decoded record
    #[track_caller]
    pub fn apply_record(&mut self, record: T) -> ApplyOutcome {
        if let Err(source) = record.validate() {
            return self.reject(ChannelError::Validation {
                channel: self.channel.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref mut notifier) = self.notifier {
            notifier(&record);
        }

        let outcome = self.policy.apply(&mut self.feed, record);
        self.stats.applied += 1;
        self.metrics.record_applied(&self.name);
        outcome
    }

    /// Apply every message already waiting, without blocking.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(message) = self.subscription.as_mut().and_then(|s| s.try_next()) {
            if self.apply_message(&message).is_applied() {
                applied += 1;
            }
        }
        self.sync_missed();
        applied
    }

    /// Wait for the next message and apply it. None once inactive.
    pub async fn recv(&mut self) -> Option<ApplyOutcome> {
        let message = self.subscription.as_mut()?.next().await;
        self.sync_missed();
        message.map(|message| self.apply_message(&message))
    }

    pub fn feed(&self) -> &BoundedFeed<T> {
        &self.feed
    }

    /// Copy of the current contents, oldest-first
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.feed.snapshot()
    }

    pub fn stats(&self) -> FeedStats {
        self.stats
    }

    #[track_caller]
    fn decode(&self, message: &ChannelMessage) -> ChannelErrorResult<T> {
        let location = ErrorLocation::from(Location::caller());
        serde_json::from_slice(&message.payload).map_err(|source| ChannelError::Decode {
            channel: message.channel.clone(),
            source,
            location,
        })
    }

    fn reject(&mut self, error: ChannelError) -> ApplyOutcome {
        log::warn!("Feed {} rejected record: {}", self.name, error);
        self.stats.rejected += 1;
        self.metrics.record_rejected(&self.name, error.reason());
        ApplyOutcome::Rejected(error)
    }

    fn sync_missed(&mut self) {
        if let Some(ref subscription) = self.subscription {
            self.stats.missed = self.missed_base + subscription.missed();
        }
    }
}
