use crate::{ApiError, ServerError};

use nids_channel::validate_channel_name;
use nids_core::{Alert, Validate};

use std::net::{IpAddr, Ipv4Addr};

use axum::{http::StatusCode, response::IntoResponse};
use googletest::assert_that;
use googletest::prelude::{eq, some};

#[test]
fn given_unknown_feed_when_converted_then_not_found() {
    let error = ApiError::from(ServerError::unknown_feed("dns"));

    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message.contains("dns")));
    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}

#[test]
fn given_closed_dashboard_when_converted_then_unavailable() {
    let error = ApiError::from(ServerError::dashboard_closed());

    assert_eq!(
        error.into_response().status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[test]
fn given_invalid_record_when_converted_then_validation_with_field() {
    // Given
    let mut alert = Alert::new(
        nids_core::Severity::High,
        "sig",
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        "TCP",
    );
    alert.protocol = "a-protocol-name-that-is-far-too-long".to_string();
    let core_error = alert.validate().unwrap_err();

    // When
    let error = ApiError::from(core_error);

    // Then
    match error {
        ApiError::Validation { ref field, .. } => {
            assert_that!(field.as_deref(), some(eq("protocol")))
        }
        ref other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn given_invalid_channel_name_when_converted_then_bad_request() {
    let channel_error = validate_channel_name("Not Valid").unwrap_err();

    let error = ApiError::from(channel_error);

    assert!(matches!(error, ApiError::BadRequest { .. }));
}

#[test]
fn given_server_channel_error_when_converted_then_unwrapped() {
    let channel_error = validate_channel_name("").unwrap_err();

    let error = ApiError::from(ServerError::from(channel_error));

    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}
