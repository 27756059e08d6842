mod api;
mod dashboard;
mod shutdown;

use nids_channel::{ChannelHub, HubConfig};
use nids_config::FeedConfig;
use nids_core::{Alert, Severity};

use std::net::{IpAddr, Ipv4Addr};

use bytes::Bytes;

pub(crate) fn small_feeds() -> FeedConfig {
    FeedConfig {
        alert_capacity: 3,
        ..FeedConfig::default()
    }
}

pub(crate) fn hub() -> ChannelHub {
    ChannelHub::new(HubConfig::default())
}

pub(crate) fn alert_payload(signature: &str, severity: Severity) -> Bytes {
    let alert = Alert::new(
        severity,
        signature,
        IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
        "UDP",
    );
    Bytes::from(serde_json::to_vec(&alert).unwrap())
}

pub(crate) fn traffic_payload() -> Bytes {
    let traffic = serde_json::json!({
        "source_ip": "192.0.2.10",
        "destination_ip": "10.0.0.2",
        "protocol": "TCP",
        "bytes": 1500,
        "packets": 3,
    });
    Bytes::from(traffic.to_string())
}
