use crate::ChannelSubscription;
use crate::tests::{hub, small_hub};

use bytes::Bytes;
use googletest::assert_that;
use googletest::prelude::{anything, eq, none, some};

#[test]
fn given_activated_subscription_when_created_then_registered_on_hub() {
    let hub = hub();

    let subscription = ChannelSubscription::activate(&hub, "alert").unwrap();

    assert!(subscription.is_active());
    assert_that!(subscription.channel(), eq("alert"));
    assert_that!(hub.subscriber_count("alert"), eq(1));
}

#[test]
fn given_subscription_without_messages_when_deactivated_then_no_error() {
    // Given
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "alert").unwrap();

    // When
    let was_active = subscription.deactivate();

    // Then
    assert!(was_active);
    assert!(!subscription.is_active());
    assert_that!(hub.channel_count(), eq(0));
}

#[test]
fn given_inactive_subscription_when_deactivated_again_then_noop() {
    // Given
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "alert").unwrap();
    let _other = ChannelSubscription::activate(&hub, "alert").unwrap();
    subscription.deactivate();

    // When
    let was_active = subscription.deactivate();

    // Then
    assert!(!was_active);
    // The second deactivation must not release the other subscriber's slot
    assert_that!(hub.subscriber_count("alert"), eq(1));
}

#[test]
fn given_dropped_subscription_when_out_of_scope_then_unsubscribed() {
    let hub = hub();

    {
        let _subscription = ChannelSubscription::activate(&hub, "traffic").unwrap();
        assert_that!(hub.subscriber_count("traffic"), eq(1));
    }

    assert_that!(hub.subscriber_count("traffic"), eq(0));
}

#[test]
fn given_channel_recreated_when_stale_subscription_deactivated_then_new_slot_kept() {
    // Given
    let hub = hub();
    let mut stale = ChannelSubscription::activate(&hub, "alert").unwrap();
    stale.deactivate();
    let mut current = ChannelSubscription::activate(&hub, "alert").unwrap();

    // When
    stale.deactivate();
    drop(stale);
    let receivers = hub.publish("alert", Bytes::from_static(b"{}")).unwrap();

    // Then
    assert_that!(hub.subscriber_count("alert"), eq(1));
    assert_that!(receivers, eq(1));
    assert_that!(current.try_next(), some(anything()));
}

#[test]
fn given_published_message_when_try_next_then_delivered_once() {
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "alert").unwrap();

    hub.publish("alert", Bytes::from_static(b"{}")).unwrap();

    assert_that!(subscription.try_next(), some(anything()));
    assert_that!(subscription.try_next(), none());
}

#[test]
fn given_deactivated_subscription_when_message_published_then_not_observed() {
    // Given
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "alert").unwrap();
    subscription.deactivate();

    // When
    let delivered = hub.publish("alert", Bytes::from_static(b"{}")).unwrap();

    // Then
    assert_that!(delivered, eq(0));
    assert_that!(subscription.try_next(), none());
}

#[test]
fn given_slow_subscriber_when_buffer_overrun_then_missed_counted() {
    // Given
    let hub = small_hub(2);
    let mut subscription = ChannelSubscription::activate(&hub, "traffic").unwrap();

    // When
    for n in 0..5u8 {
        hub.publish("traffic", Bytes::from(vec![n])).unwrap();
    }

    // Then: the oldest retained messages are still delivered in order
    let first = subscription.try_next().unwrap();
    let second = subscription.try_next().unwrap();
    assert_eq!(first.payload, Bytes::from(vec![3u8]));
    assert_eq!(second.payload, Bytes::from(vec![4u8]));
    assert_that!(subscription.missed(), eq(3));
    assert!(subscription.is_active());
}

#[tokio::test]
async fn given_pending_message_when_next_awaited_then_returned() {
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "attack").unwrap();
    hub.publish("attack", Bytes::from_static(b"{}")).unwrap();

    let message = subscription.next().await;

    assert_that!(message.map(|m| m.channel), some(eq("attack")));
}

#[tokio::test]
async fn given_inactive_subscription_when_next_awaited_then_none_immediately() {
    let hub = hub();
    let mut subscription = ChannelSubscription::activate(&hub, "attack").unwrap();
    subscription.deactivate();

    let message = subscription.next().await;

    assert!(message.is_none());
}

#[test]
fn given_two_subscriptions_when_activated_then_ids_differ() {
    let hub = hub();

    let first = ChannelSubscription::activate(&hub, "alert").unwrap();
    let second = ChannelSubscription::activate(&hub, "alert").unwrap();

    assert_ne!(first.id(), second.id());
}
