use crate::ShutdownCoordinator;

use std::time::Duration;

use tokio::time::timeout;

#[test]
fn given_new_coordinator_when_checked_then_not_shutdown() {
    let coordinator = ShutdownCoordinator::new();

    assert!(!coordinator.is_shutdown());
    assert!(!coordinator.subscribe_guard().poll_shutdown());
}

#[tokio::test]
async fn given_guard_when_shutdown_triggered_then_wait_completes() {
    // Given
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    // When
    coordinator.shutdown();

    // Then
    assert!(timeout(Duration::from_secs(1), guard.wait()).await.is_ok());
    assert!(coordinator.is_shutdown());
}

#[tokio::test]
async fn given_shutdown_already_triggered_when_guard_created_then_observes_it() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    let mut late_guard = coordinator.subscribe_guard();

    assert!(late_guard.poll_shutdown());
    assert!(timeout(Duration::from_secs(1), late_guard.wait()).await.is_ok());
}

#[test]
fn given_shutdown_when_triggered_twice_then_still_shutdown() {
    let coordinator = ShutdownCoordinator::new();
    let clone = coordinator.clone();

    coordinator.shutdown();
    clone.shutdown();

    assert!(clone.is_shutdown());
}
