use crate::{ChannelHub, ChannelMessage, Result as ChannelErrorResult};

use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;
use uuid::Uuid;

/// A consumer's registration on one named channel.
///
/// Messages are only observable while the subscription is active.
/// Deactivation drops the receiver immediately, so nothing published
/// afterwards can be delivered through it. Dropping deactivates.
pub struct ChannelSubscription {
    id: Uuid,
    channel: String,
    hub: ChannelHub,
    receiver: Option<Receiver<ChannelMessage>>,
    missed: u64,
}

impl ChannelSubscription {
    #[track_caller]
    pub fn activate(hub: &ChannelHub, channel: &str) -> ChannelErrorResult<Self> {
        let receiver = hub.subscribe(channel)?;
        let id = Uuid::new_v4();

        log::debug!("Subscription {} activated on channel {}", id, channel);
        hub.metrics().subscription_changed("activated");

        Ok(Self {
            id,
            channel: channel.to_string(),
            hub: hub.clone(),
            receiver: Some(receiver),
            missed: 0,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Messages dropped because this subscriber fell behind the hub buffer
    pub fn missed(&self) -> u64 {
        self.missed
    }

    /// Deregister from the hub. Returns false if already inactive.
    pub fn deactivate(&mut self) -> bool {
        if self.receiver.take().is_none() {
            return false;
        }

        self.hub.unsubscribe(&self.channel);
        self.hub.metrics().subscription_changed("deactivated");
        log::debug!(
            "Subscription {} deactivated on channel {}",
            self.id,
            self.channel
        );

        true
    }

    /// Next pending message without waiting
    pub fn try_next(&mut self) -> Option<ChannelMessage> {
        loop {
            let result = self.receiver.as_mut()?.try_recv();

            match result {
                Ok(message) => return Some(message),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Lagged(count)) => self.record_lag(count),
                Err(TryRecvError::Closed) => {
                    self.deactivate();
                    return None;
                }
            }
        }
    }

    /// Wait for the next message. Returns None once inactive.
    pub async fn next(&mut self) -> Option<ChannelMessage> {
        loop {
            let result = self.receiver.as_mut()?.recv().await;

            match result {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(count)) => self.record_lag(count),
                Err(RecvError::Closed) => {
                    self.deactivate();
                    return None;
                }
            }
        }
    }

    fn record_lag(&mut self, count: u64) {
        self.missed += count;
        self.hub.metrics().messages_missed(&self.channel, count);
        log::warn!(
            "Subscription {} on channel {} lagged, missed {} messages",
            self.id,
            self.channel,
            count
        );
    }
}

impl Drop for ChannelSubscription {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl std::fmt::Debug for ChannelSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSubscription")
            .field("id", &self.id)
            .field("channel", &self.channel)
            .field("active", &self.is_active())
            .field("missed", &self.missed)
            .finish()
    }
}
