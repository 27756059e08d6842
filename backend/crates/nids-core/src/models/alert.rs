use crate::models::{MAX_PROTOCOL_LENGTH, new_record_id};
use crate::validate::validate_string;
use crate::{Result as CoreErrorResult, Severity, Validate};

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MAX_SIGNATURE_LENGTH: usize = 256;
const MAX_MESSAGE_LENGTH: usize = 2048;

/// IDS alert raised by a sensor signature match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default = "new_record_id")]
    pub id: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub signature: String,
    pub source_ip: IpAddr,
    pub destination_ip: IpAddr,
    pub protocol: String,
    #[serde(default)]
    pub message: String,
}

impl Alert {
    pub fn new(
        severity: Severity,
        signature: impl Into<String>,
        source_ip: IpAddr,
        destination_ip: IpAddr,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            id: new_record_id(),
            timestamp: Utc::now(),
            severity,
            signature: signature.into(),
            source_ip,
            destination_ip,
            protocol: protocol.into(),
            message: String::new(),
        }
    }
}

impl Validate for Alert {
    fn validate(&self) -> CoreErrorResult<()> {
        validate_string(&self.id, "id", 1, 64)?;
        validate_string(&self.signature, "signature", 1, MAX_SIGNATURE_LENGTH)?;
        validate_string(&self.protocol, "protocol", 1, MAX_PROTOCOL_LENGTH)?;
        validate_string(&self.message, "message", 0, MAX_MESSAGE_LENGTH)
    }
}
