use crate::dashboard::feed_names;
use crate::tests::{alert_payload, hub, small_feeds, traffic_payload};
use crate::{Dashboard, ServerError};

use nids_channel::ApplyOutcome;
use nids_config::FeedConfig;
use nids_core::{Severity, channels};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_default_config_when_built_then_six_inactive_feeds() {
    let mut dashboard = Dashboard::new(&FeedConfig::default()).unwrap();

    assert_eq!(
        dashboard.names(),
        vec![
            feed_names::ALERTS,
            feed_names::TRAFFIC,
            feed_names::ATTACKS,
            feed_names::HEALTH,
            feed_names::INTERFACES,
            feed_names::SEVERITY_TREND,
        ]
    );
    assert!(dashboard.statuses().iter().all(|status| !status.active));
}

#[test]
fn given_default_config_when_built_then_capacities_and_policies_match() {
    let mut dashboard = Dashboard::new(&FeedConfig::default()).unwrap();

    let statuses = dashboard.statuses();
    let describe: Vec<(&str, &str, usize)> = statuses
        .iter()
        .map(|s| (s.channel.as_str(), s.policy, s.capacity))
        .collect();

    assert_eq!(
        describe,
        vec![
            (channels::ALERT, "append", 100),
            (channels::TRAFFIC, "append", 60),
            (channels::ATTACK, "append", 100),
            (channels::HEALTH_UPDATE, "append", 90),
            (channels::INTERFACE_UPDATE, "upsert", 64),
            (channels::SEVERITY_TREND, "upsert", 7),
        ]
    );
}

#[test]
fn given_zero_capacity_when_built_then_error() {
    let config = FeedConfig {
        traffic_capacity: 0,
        ..FeedConfig::default()
    };

    let result = Dashboard::new(&config);

    assert!(matches!(result, Err(ServerError::Feed(_))));
}

#[test]
fn given_unknown_feed_when_snapshot_requested_then_unknown_feed_error() {
    let mut dashboard = Dashboard::new(&FeedConfig::default()).unwrap();

    let result = dashboard.snapshot("dns");

    assert!(matches!(result, Err(ServerError::UnknownFeed { ref name, .. }) if name == "dns"));
}

#[test]
fn given_active_dashboard_when_alerts_published_then_snapshot_holds_newest() {
    // Given
    let hub = hub();
    let mut dashboard = Dashboard::new(&small_feeds()).unwrap();
    dashboard.activate_all(&hub).unwrap();

    // When
    for signature in ["A", "B", "C", "D"] {
        hub.publish(channels::ALERT, alert_payload(signature, Severity::Critical))
            .unwrap();
    }
    let snapshot = dashboard.snapshot(feed_names::ALERTS).unwrap();

    // Then
    assert!(snapshot.active);
    assert_that!(snapshot.capacity, eq(3));
    let signatures: Vec<&str> = snapshot
        .items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["signature"].as_str().unwrap())
        .collect();
    assert_eq!(signatures, vec!["B", "C", "D"]);
}

#[test]
fn given_active_feed_when_deactivated_then_later_messages_ignored() {
    // Given
    let hub = hub();
    let mut dashboard = Dashboard::new(&small_feeds()).unwrap();
    dashboard.activate_all(&hub).unwrap();
    hub.publish(channels::ALERT, alert_payload("kept", Severity::Low))
        .unwrap();

    // When
    let status = dashboard.deactivate(feed_names::ALERTS).unwrap();
    hub.publish(channels::ALERT, alert_payload("dropped", Severity::Low))
        .unwrap();

    // Then
    assert!(!status.active);
    assert_that!(status.len, eq(1));
    let snapshot = dashboard.snapshot(feed_names::ALERTS).unwrap();
    assert_that!(snapshot.items.as_array().unwrap().len(), eq(1));
    assert_eq!(snapshot.items[0]["signature"], "kept");
}

#[test]
fn given_active_dashboard_when_all_deactivated_then_hub_empty() {
    let hub = hub();
    let mut dashboard = Dashboard::new(&FeedConfig::default()).unwrap();
    dashboard.activate_all(&hub).unwrap();
    assert_that!(hub.channel_count(), eq(6));

    dashboard.deactivate_all();

    assert_that!(hub.channel_count(), eq(0));
}

#[tokio::test]
async fn given_active_feed_when_message_published_then_next_message_applies_it() {
    // Given
    let hub = hub();
    let mut dashboard = Dashboard::new(&small_feeds()).unwrap();
    dashboard.activate(feed_names::ALERTS, &hub).unwrap();

    // When
    hub.publish(channels::ALERT, alert_payload("next", Severity::High))
        .unwrap();
    let (feed, outcome) = dashboard.next_message().await;

    // Then
    assert_that!(feed.as_str(), eq(feed_names::ALERTS));
    assert!(matches!(outcome, Some(ApplyOutcome::Inserted)));
}

#[tokio::test]
async fn given_busy_first_feed_when_waiting_repeatedly_then_later_feed_served() {
    // Given
    let hub = hub();
    let mut dashboard = Dashboard::new(&small_feeds()).unwrap();
    dashboard.activate(feed_names::ALERTS, &hub).unwrap();
    dashboard.activate(feed_names::TRAFFIC, &hub).unwrap();

    for signature in ["one", "two", "three"] {
        hub.publish(channels::ALERT, alert_payload(signature, Severity::Low))
            .unwrap();
    }
    hub.publish(channels::TRAFFIC, traffic_payload()).unwrap();

    // When
    let (first, _) = dashboard.next_message().await;
    let (second, outcome) = dashboard.next_message().await;

    // Then
    assert_that!(first.as_str(), eq(feed_names::ALERTS));
    assert_that!(second.as_str(), eq(feed_names::TRAFFIC));
    assert!(matches!(outcome, Some(ApplyOutcome::Inserted)));
}
