pub mod channels;
pub mod error;
pub mod models;
pub mod validate;

pub use error::{CoreError, Result};
pub use models::alert::Alert;
pub use models::attack_action::AttackAction;
pub use models::attack_log::AttackLog;
pub use models::health_snapshot::HealthSnapshot;
pub use models::interface_status::InterfaceStatus;
pub use models::link_state::LinkState;
pub use models::severity::Severity;
pub use models::severity_count::SeverityCount;
pub use models::traffic_log::TrafficLog;
pub use validate::Validate;

#[cfg(test)]
mod tests;
