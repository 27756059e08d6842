use crate::validate::{validate_percent, validate_rate};
use crate::{Result as CoreErrorResult, Validate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sensor resource usage sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    #[serde(default)]
    pub packets_per_second: f64,
}

impl Validate for HealthSnapshot {
    fn validate(&self) -> CoreErrorResult<()> {
        validate_percent(self.cpu_percent, "cpu_percent")?;
        validate_percent(self.memory_percent, "memory_percent")?;
        validate_percent(self.disk_percent, "disk_percent")?;
        validate_rate(self.packets_per_second, "packets_per_second")
    }
}
