use crate::{ChannelError, ChannelMessage, HubConfig, Metrics, Result as ChannelErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use error_location::ErrorLocation;
use parking_lot::RwLock;
use tokio::sync::broadcast;

const MAX_CHANNEL_NAME_LENGTH: usize = 64;

/// Routes published records to every subscriber of a named channel.
///
/// One hub is created by the owner of the process and handed to each
/// consumer explicitly; clones share the same channel table.
pub struct ChannelHub {
    inner: Arc<RwLock<HubInner>>,
    sequence: Arc<AtomicU64>,
    config: HubConfig,
    metrics: Metrics,
}

struct HubInner {
    channels: HashMap<String, HubChannel>,
}

/// Per-channel broadcast sender
struct HubChannel {
    sender: broadcast::Sender<ChannelMessage>,
    subscriber_count: usize,
}

impl ChannelHub {
    pub fn new(config: HubConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HubInner {
                channels: HashMap::new(),
            })),
            sequence: Arc::new(AtomicU64::new(0)),
            config,
            metrics: Metrics::new(),
        }
    }

    /// Register a receiver on a channel, creating the channel on first use.
    /// Only `ChannelSubscription` pairs this with `unsubscribe`.
    #[track_caller]
    pub(crate) fn subscribe(&self, channel: &str) -> ChannelErrorResult<broadcast::Receiver<ChannelMessage>> {
        validate_channel_name(channel)?;

        let mut inner = self.inner.write();

        let entry = inner
            .channels
            .entry(channel.to_string())
            .or_insert_with(|| {
                let (sender, _) = broadcast::channel(self.config.channel_capacity);
                log::info!("Created channel {}", channel);
                HubChannel {
                    sender,
                    subscriber_count: 0,
                }
            });

        entry.subscriber_count += 1;
        let receiver = entry.sender.subscribe();

        log::debug!(
            "Subscribed to channel {} ({} total subscribers)",
            channel,
            entry.subscriber_count
        );

        Ok(receiver)
    }

    /// Release one subscriber slot; the channel is removed with its last subscriber
    pub(crate) fn unsubscribe(&self, channel: &str) {
        let mut inner = self.inner.write();

        if let Some(entry) = inner.channels.get_mut(channel) {
            entry.subscriber_count = entry.subscriber_count.saturating_sub(1);

            log::debug!(
                "Unsubscribed from channel {} ({} remaining subscribers)",
                channel,
                entry.subscriber_count
            );

            if entry.subscriber_count == 0 {
                inner.channels.remove(channel);
                log::info!("Removed empty channel {}", channel);
            }
        }
    }

    /// Publish a JSON-encoded record. Returns how many receivers got it.
    #[track_caller]
    pub fn publish(&self, channel: &str, payload: Bytes) -> ChannelErrorResult<usize> {
        validate_channel_name(channel)?;

        let inner = self.inner.read();

        let Some(entry) = inner.channels.get(channel) else {
            log::debug!("No subscribers on channel {}, message dropped", channel);
            return Ok(0);
        };

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let message = ChannelMessage::new(channel.to_string(), sequence, payload);

        let receiver_count = match entry.sender.send(message) {
            Ok(receiver_count) => receiver_count,
            Err(_) => {
                log::debug!("Publish to channel {} had no active receivers", channel);
                0
            }
        };

        log::debug!(
            "Published #{} to channel {} ({} receivers)",
            sequence,
            channel,
            receiver_count
        );
        self.metrics.published(channel, receiver_count);

        Ok(receiver_count)
    }

    /// Get subscriber count for a channel
    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.inner
            .read()
            .channels
            .get(channel)
            .map(|c| c.subscriber_count)
            .unwrap_or(0)
    }

    /// Names of channels with at least one subscriber
    pub fn active_channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = self.inner.read().channels.keys().cloned().collect();
        channels.sort();
        channels
    }

    pub fn channel_count(&self) -> usize {
        self.inner.read().channels.len()
    }

    pub(crate) fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl Clone for ChannelHub {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            sequence: Arc::clone(&self.sequence),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl Default for ChannelHub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

/// Channel names are short snake_case identifiers
#[track_caller]
pub fn validate_channel_name(channel: &str) -> ChannelErrorResult<()> {
    let reason = if channel.is_empty() {
        Some("cannot be empty".to_string())
    } else if channel.len() > MAX_CHANNEL_NAME_LENGTH {
        Some(format!(
            "exceeds maximum length ({})",
            MAX_CHANNEL_NAME_LENGTH
        ))
    } else if !channel
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        Some("only lowercase letters, digits and '_' are allowed".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ChannelError::InvalidChannelName {
            name: channel.to_string(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(()),
    }
}
