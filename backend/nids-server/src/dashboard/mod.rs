#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod dashboard_actor;
pub mod dashboard_command;
pub mod dashboard_handle;
pub mod feed_snapshot;

/// Feed names exposed by the dashboard
pub mod feed_names {
    pub const ALERTS: &str = "alerts";
    pub const TRAFFIC: &str = "traffic";
    pub const ATTACKS: &str = "attacks";
    pub const HEALTH: &str = "health";
    pub const INTERFACES: &str = "interfaces";
    pub const SEVERITY_TREND: &str = "severity_trend";
}
