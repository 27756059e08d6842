use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Feed capacity constraints
pub const MIN_FEED_CAPACITY: usize = 1;
pub const MAX_FEED_CAPACITY: usize = 10000;
pub const DEFAULT_ALERT_CAPACITY: usize = 100;
pub const DEFAULT_TRAFFIC_CAPACITY: usize = 60;
pub const DEFAULT_ATTACK_CAPACITY: usize = 100;
pub const DEFAULT_HEALTH_CAPACITY: usize = 90;
pub const DEFAULT_INTERFACE_CAPACITY: usize = 64;

// Severity trend window (days)
pub const MIN_SEVERITY_TREND_DAYS: usize = 1;
pub const MAX_SEVERITY_TREND_DAYS: usize = 366;
pub const DEFAULT_SEVERITY_TREND_DAYS: usize = 7;

/// Retained record counts for each live feed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub alert_capacity: usize,
    pub traffic_capacity: usize,
    pub attack_capacity: usize,
    pub health_capacity: usize,
    pub interface_capacity: usize,
    pub severity_trend_days: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            alert_capacity: DEFAULT_ALERT_CAPACITY,
            traffic_capacity: DEFAULT_TRAFFIC_CAPACITY,
            attack_capacity: DEFAULT_ATTACK_CAPACITY,
            health_capacity: DEFAULT_HEALTH_CAPACITY,
            interface_capacity: DEFAULT_INTERFACE_CAPACITY,
            severity_trend_days: DEFAULT_SEVERITY_TREND_DAYS,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_capacity("feeds.alert_capacity", self.alert_capacity)?;
        Self::validate_capacity("feeds.traffic_capacity", self.traffic_capacity)?;
        Self::validate_capacity("feeds.attack_capacity", self.attack_capacity)?;
        Self::validate_capacity("feeds.health_capacity", self.health_capacity)?;
        Self::validate_capacity("feeds.interface_capacity", self.interface_capacity)?;

        if self.severity_trend_days < MIN_SEVERITY_TREND_DAYS
            || self.severity_trend_days > MAX_SEVERITY_TREND_DAYS
        {
            return Err(ConfigError::feed(format!(
                "feeds.severity_trend_days must be {}-{}, got {}",
                MIN_SEVERITY_TREND_DAYS, MAX_SEVERITY_TREND_DAYS, self.severity_trend_days
            )));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_capacity(name: &str, value: usize) -> ConfigErrorResult<()> {
        if !(MIN_FEED_CAPACITY..=MAX_FEED_CAPACITY).contains(&value) {
            return Err(ConfigError::feed(format!(
                "{} must be {}-{}, got {}",
                name, MIN_FEED_CAPACITY, MAX_FEED_CAPACITY, value
            )));
        }

        Ok(())
    }
}
