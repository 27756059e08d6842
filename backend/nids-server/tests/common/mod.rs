#![allow(dead_code)]

//! Test infrastructure for nids-server API tests

use nids_channel::{ChannelHub, HubConfig};
use nids_config::FeedConfig;
use nids_server::{AppState, Dashboard, DashboardActor, ShutdownCoordinator};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Feed sizes small enough to observe eviction
pub fn test_feed_config() -> FeedConfig {
    FeedConfig {
        alert_capacity: 3,
        interface_capacity: 4,
        ..FeedConfig::default()
    }
}

/// AppState with every feed active and the dashboard actor running
pub fn create_test_app_state() -> AppState {
    let hub = ChannelHub::new(HubConfig::default());
    let shutdown = ShutdownCoordinator::new();

    let mut dashboard = Dashboard::new(&test_feed_config()).expect("Failed to build dashboard");
    dashboard
        .activate_all(&hub)
        .expect("Failed to activate feeds");

    let (actor, handle) = DashboardActor::new(dashboard, hub.clone(), shutdown.clone(), 16);
    actor.spawn();

    AppState {
        hub,
        dashboard: handle,
        shutdown,
        prometheus: None,
    }
}

pub fn alert_json(signature: &str, severity: &str) -> Value {
    json!({
        "severity": severity,
        "signature": signature,
        "source_ip": "198.51.100.23",
        "destination_ip": "10.0.0.4",
        "protocol": "TCP",
        "message": "test alert",
    })
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
