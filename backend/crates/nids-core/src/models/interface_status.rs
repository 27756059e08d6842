use crate::validate::validate_string;
use crate::{LinkState, Result as CoreErrorResult, Validate};

use chrono::{DateTime, Utc};
use nids_feed::Keyed;
use serde::{Deserialize, Serialize};

const MAX_INTERFACE_NAME_LENGTH: usize = 64;

/// Latest known state of one capture interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceStatus {
    pub interface: String,
    pub state: LinkState,
    #[serde(default)]
    pub rx_bytes: u64,
    #[serde(default)]
    pub tx_bytes: u64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Keyed for InterfaceStatus {
    type Key = String;

    fn key(&self) -> &String {
        &self.interface
    }
}

impl Validate for InterfaceStatus {
    fn validate(&self) -> CoreErrorResult<()> {
        validate_string(&self.interface, "interface", 1, MAX_INTERFACE_NAME_LENGTH)
    }
}
