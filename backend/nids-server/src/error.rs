use nids_channel::ChannelError;
use nids_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Unknown feed '{name}' {location}")]
    UnknownFeed {
        name: String,
        location: ErrorLocation,
    },

    #[error("Dashboard is no longer running {location}")]
    DashboardClosed { location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },

    #[error("Feed error: {0}")]
    Feed(#[from] nids_feed::FeedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    #[track_caller]
    pub fn unknown_feed(name: impl Into<String>) -> Self {
        Self::UnknownFeed {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dashboard_closed() -> Self {
        Self::DashboardClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
