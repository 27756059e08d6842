use bytes::Bytes;

/// A record published on a named channel, still in wire form
#[derive(Debug, Clone)]
pub struct ChannelMessage {
    /// Channel the message was published on
    pub channel: String,
    /// Hub-wide publish order
    pub sequence: u64,
    /// JSON-encoded record; each subscriber decodes it into its own type
    pub payload: Bytes,
}

impl ChannelMessage {
    pub fn new(channel: String, sequence: u64, payload: Bytes) -> Self {
        Self {
            channel,
            sequence,
            payload,
        }
    }
}
