mod channel_subscription;

use crate::{AppendPolicy, ChannelHub, HubConfig, LiveFeed, UpsertPolicy};

use nids_core::{Alert, InterfaceStatus, LinkState, Severity, SeverityCount, channels};
use nids_feed::{BoundedFeed, merge};

use std::net::{IpAddr, Ipv4Addr};

use bytes::Bytes;

pub(crate) fn hub() -> ChannelHub {
    ChannelHub::new(HubConfig::default())
}

pub(crate) fn small_hub(channel_capacity: usize) -> ChannelHub {
    ChannelHub::new(HubConfig { channel_capacity })
}

pub(crate) fn alert(signature: &str) -> Alert {
    Alert::new(
        Severity::High,
        signature,
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)),
        IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)),
        "TCP",
    )
}

pub(crate) fn encode<T: serde::Serialize>(record: &T) -> Bytes {
    Bytes::from(serde_json::to_vec(record).unwrap())
}

pub(crate) fn alert_feed(capacity: usize) -> LiveFeed<Alert, AppendPolicy> {
    LiveFeed::new(
        "alerts",
        channels::ALERT,
        BoundedFeed::new(capacity).unwrap(),
        AppendPolicy,
    )
}

pub(crate) fn interface_status(interface: &str, state: LinkState) -> InterfaceStatus {
    InterfaceStatus {
        interface: interface.to_string(),
        state,
        rx_bytes: 0,
        tx_bytes: 0,
        timestamp: chrono::Utc::now(),
    }
}

pub(crate) type SeverityTrendFeed =
    LiveFeed<SeverityCount, UpsertPolicy<fn(&SeverityCount, SeverityCount) -> SeverityCount>>;

pub(crate) fn severity_trend_feed(days: usize) -> SeverityTrendFeed {
    LiveFeed::new(
        "severity_trend",
        channels::SEVERITY_TREND,
        BoundedFeed::new(days).unwrap(),
        UpsertPolicy::new(merge::accumulate as fn(&SeverityCount, SeverityCount) -> SeverityCount),
    )
}
