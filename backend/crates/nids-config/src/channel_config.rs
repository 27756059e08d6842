use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Per-channel hub buffer constraints
pub const MIN_CHANNEL_BUFFER: usize = 1;
pub const MAX_CHANNEL_BUFFER: usize = 65536;
pub const DEFAULT_CHANNEL_BUFFER: usize = 1024;

/// Channel hub settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Messages buffered per channel before slow subscribers start lagging
    pub buffer_capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl ChannelConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.buffer_capacity < MIN_CHANNEL_BUFFER || self.buffer_capacity > MAX_CHANNEL_BUFFER {
            return Err(ConfigError::config(format!(
                "channels.buffer_capacity must be {}-{}, got {}",
                MIN_CHANNEL_BUFFER, MAX_CHANNEL_BUFFER, self.buffer_capacity
            )));
        }

        Ok(())
    }
}
