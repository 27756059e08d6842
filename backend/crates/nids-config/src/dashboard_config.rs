use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_COMMAND_BUFFER: usize = 1;
pub const MAX_COMMAND_BUFFER: usize = 4096;
pub const DEFAULT_COMMAND_BUFFER: usize = 64;

/// Dashboard actor settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Queued snapshot/activation requests before callers wait
    pub command_buffer: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.command_buffer < MIN_COMMAND_BUFFER || self.command_buffer > MAX_COMMAND_BUFFER {
            return Err(ConfigError::config(format!(
                "dashboard.command_buffer must be {}-{}, got {}",
                MIN_COMMAND_BUFFER, MAX_COMMAND_BUFFER, self.command_buffer
            )));
        }

        Ok(())
    }
}
