use crate::models::new_record_id;
use crate::validate::validate_string;
use crate::{AttackAction, Result as CoreErrorResult, Severity, Validate};

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detected attack attempt and the sensor's response to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackLog {
    #[serde(default = "new_record_id")]
    pub id: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub attack_type: String,
    pub source_ip: IpAddr,
    pub target_ip: IpAddr,
    pub severity: Severity,
    #[serde(default)]
    pub action: AttackAction,
}

impl Validate for AttackLog {
    fn validate(&self) -> CoreErrorResult<()> {
        validate_string(&self.id, "id", 1, 64)?;
        validate_string(&self.attack_type, "attack_type", 1, 128)
    }
}
