pub mod alert;
pub mod attack_action;
pub mod attack_log;
pub mod health_snapshot;
pub mod interface_status;
pub mod link_state;
pub mod severity;
pub mod severity_count;
pub mod traffic_log;

pub(crate) const MAX_PROTOCOL_LENGTH: usize = 16;

/// Locally generated record identity for producers that send none
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
