use crate::ChannelError;

/// Result of delivering one channel message to a feed
#[derive(Debug)]
pub enum ApplyOutcome {
    /// Record added at the newest end
    Inserted,
    /// Record added and the oldest record dropped
    Evicted,
    /// Record merged into the existing entry with the same key
    Merged,
    /// Record failed decoding or validation and was not applied
    Rejected(ChannelError),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}
