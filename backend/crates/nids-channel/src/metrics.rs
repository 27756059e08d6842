use metrics::{counter, gauge};

/// Metrics collector for channel and feed activity
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "nids_feed" }
    }

    /// Record message published on a channel
    pub fn published(&self, channel: &str, receiver_count: usize) {
        counter!(format!("{}.published", self.prefix)).increment(1);
        counter!(format!("{}.published.{}", self.prefix, channel)).increment(1);
        gauge!(format!("{}.receivers.{}", self.prefix, channel)).set(receiver_count as f64);
    }

    /// Record a record applied to a feed
    pub fn record_applied(&self, feed: &str) {
        counter!(format!("{}.records.applied", self.prefix)).increment(1);
        counter!(format!("{}.records.applied.{}", self.prefix, feed)).increment(1);
    }

    /// Record a record rejected before reaching a feed
    pub fn record_rejected(&self, feed: &str, reason: &str) {
        counter!(format!("{}.records.rejected", self.prefix)).increment(1);
        counter!(format!("{}.records.rejected.{}.{}", self.prefix, feed, reason)).increment(1);
    }

    /// Record messages a lagging subscriber never saw
    pub fn messages_missed(&self, channel: &str, count: u64) {
        counter!(format!("{}.messages.missed", self.prefix)).increment(count);
        counter!(format!("{}.messages.missed.{}", self.prefix, channel)).increment(count);
    }

    /// Record subscription change ("activated" / "deactivated")
    pub fn subscription_changed(&self, action: &str) {
        counter!(format!("{}.subscriptions.{}", self.prefix, action)).increment(1);
        match action {
            "activated" => gauge!(format!("{}.subscriptions.active", self.prefix)).increment(1.0),
            "deactivated" => {
                gauge!(format!("{}.subscriptions.active", self.prefix)).decrement(1.0)
            }
            _ => {}
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
