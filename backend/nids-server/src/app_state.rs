use crate::{DashboardHandle, ShutdownCoordinator};

use nids_channel::ChannelHub;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub hub: ChannelHub,
    pub dashboard: DashboardHandle,
    pub shutdown: ShutdownCoordinator,
    /// None when no recorder is installed (tests)
    pub prometheus: Option<PrometheusHandle>,
}
