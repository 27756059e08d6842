use nids_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Invalid channel name '{name}': {reason} {location}")]
    InvalidChannelName {
        name: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Record decode failed on channel {channel}: {source} {location}")]
    Decode {
        channel: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Record rejected on channel {channel}: {source} {location}")]
    Validation {
        channel: String,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Snapshot encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Feed error: {source}")]
    Feed {
        #[from]
        source: nids_feed::FeedError,
    },
}

impl ChannelError {
    /// Short reason label for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidChannelName { .. } => "invalid_channel",
            Self::Decode { .. } => "decode",
            Self::Validation { .. } => "validation",
            Self::Encode { .. } => "encode",
            Self::Feed { .. } => "feed",
        }
    }

    /// Field that failed validation, if known
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { source, .. } => source.field(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChannelError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
