use crate::models::MAX_PROTOCOL_LENGTH;
use crate::validate::validate_string;
use crate::{CoreError, Result as CoreErrorResult, Validate};

use std::net::IpAddr;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One flow summary observed on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLog {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub source_ip: IpAddr,
    pub destination_ip: IpAddr,
    pub protocol: String,
    pub bytes: u64,
    pub packets: u64,
}

impl Validate for TrafficLog {
    fn validate(&self) -> CoreErrorResult<()> {
        validate_string(&self.protocol, "protocol", 1, MAX_PROTOCOL_LENGTH)?;

        if self.packets == 0 && self.bytes > 0 {
            return Err(CoreError::Validation {
                message: format!("{} bytes reported across zero packets", self.bytes),
                field: Some("packets".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
