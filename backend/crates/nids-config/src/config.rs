use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ChannelConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DashboardConfig, FeedConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub channels: ChannelConfig,
    pub feeds: FeedConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for NIDS_CONFIG_DIR env var, else use ./.nids/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply NIDS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: NIDS_CONFIG_DIR env var > ./.nids/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.channels.validate()?;
        self.feeds.validate()?;
        self.dashboard.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  channels: buffer={}", self.channels.buffer_capacity);
        info!(
            "  feeds: alerts={}, traffic={}, attacks={}, health={}, interfaces={}, severity_trend={}d",
            self.feeds.alert_capacity,
            self.feeds.traffic_capacity,
            self.feeds.attack_capacity,
            self.feeds.health_capacity,
            self.feeds.interface_capacity,
            self.feeds.severity_trend_days
        );
        info!("  dashboard: command_buffer={}", self.dashboard.command_buffer);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("NIDS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("NIDS_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("NIDS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("NIDS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("NIDS_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("NIDS_LOG_FILE", &mut self.logging.file);

        // Channels
        Self::apply_env_parse(
            "NIDS_CHANNEL_BUFFER_CAPACITY",
            &mut self.channels.buffer_capacity,
        );

        // Feeds
        Self::apply_env_parse("NIDS_FEED_ALERT_CAPACITY", &mut self.feeds.alert_capacity);
        Self::apply_env_parse(
            "NIDS_FEED_TRAFFIC_CAPACITY",
            &mut self.feeds.traffic_capacity,
        );
        Self::apply_env_parse("NIDS_FEED_ATTACK_CAPACITY", &mut self.feeds.attack_capacity);
        Self::apply_env_parse("NIDS_FEED_HEALTH_CAPACITY", &mut self.feeds.health_capacity);
        Self::apply_env_parse(
            "NIDS_FEED_INTERFACE_CAPACITY",
            &mut self.feeds.interface_capacity,
        );
        Self::apply_env_parse(
            "NIDS_FEED_SEVERITY_TREND_DAYS",
            &mut self.feeds.severity_trend_days,
        );

        // Dashboard
        Self::apply_env_parse(
            "NIDS_DASHBOARD_COMMAND_BUFFER",
            &mut self.dashboard.command_buffer,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
