//! Names of the push channels records arrive on.

pub const ALERT: &str = "alert";
pub const TRAFFIC: &str = "traffic";
pub const ATTACK: &str = "attack";
pub const HEALTH_UPDATE: &str = "health_update";
pub const INTERFACE_UPDATE: &str = "interface_update";
pub const SEVERITY_TREND: &str = "severity_trend";

/// Every channel with a known record type
pub const ALL: [&str; 6] = [
    ALERT,
    TRAFFIC,
    ATTACK,
    HEALTH_UPDATE,
    INTERFACE_UPDATE,
    SEVERITY_TREND,
];

pub fn is_known(channel: &str) -> bool {
    ALL.contains(&channel)
}
