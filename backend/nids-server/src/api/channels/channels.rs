//! Channel publish handler
//!
//! Producers push sensor records here. Each record is decoded as the type
//! its channel carries and validated before anything is published, so
//! subscribers only ever see well-formed records.

use crate::{ApiError, ApiResult, AppState, PublishResponse, create_publish_span};

use nids_channel::validate_channel_name;
use nids_core::{
    Alert, AttackLog, HealthSnapshot, InterfaceStatus, SeverityCount, TrafficLog, Validate,
    channels,
};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use bytes::Bytes;
use error_location::ErrorLocation;
use serde::{Serialize, de::DeserializeOwned};

/// POST /api/v1/channels/{channel}
///
/// Validate a JSON record and publish it to every subscriber of `channel`
pub async fn publish_record(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    body: Bytes,
) -> ApiResult<Json<PublishResponse>> {
    create_publish_span(&channel, body.len()).in_scope(|| -> ApiResult<Json<PublishResponse>> {
        validate_channel_name(&channel)?;

        let payload = normalize_record(&channel, &body)?;
        let receivers = state.hub.publish(&channel, payload)?;

        tracing::debug!("Published record to {} receivers", receivers);

        Ok(Json(PublishResponse { channel, receivers }))
    })
}

/// Decode `body` as the record type carried by `channel`, validate it, and
/// re-encode it with server-side defaults (id, timestamp) filled in
#[track_caller]
fn normalize_record(channel: &str, body: &[u8]) -> ApiResult<Bytes> {
    match channel {
        channels::ALERT => normalize::<Alert>(channel, body),
        channels::TRAFFIC => normalize::<TrafficLog>(channel, body),
        channels::ATTACK => normalize::<AttackLog>(channel, body),
        channels::HEALTH_UPDATE => normalize::<HealthSnapshot>(channel, body),
        channels::INTERFACE_UPDATE => normalize::<InterfaceStatus>(channel, body),
        channels::SEVERITY_TREND => normalize::<SeverityCount>(channel, body),
        _ => Err(ApiError::NotFound {
            message: format!("Channel {} not found", channel),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[track_caller]
fn normalize<T>(channel: &str, body: &[u8]) -> ApiResult<Bytes>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let record: T = serde_json::from_slice(body).map_err(|e| ApiError::Validation {
        message: format!("Malformed {} record: {}", channel, e),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    })?;

    record.validate()?;

    let encoded = serde_json::to_vec(&record).map_err(|e| ApiError::Internal {
        message: format!("Failed to encode {} record: {}", channel, e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Bytes::from(encoded))
}
