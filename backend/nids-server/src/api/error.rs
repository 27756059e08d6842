//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::ServerError;

use nids_channel::ChannelError;
use nids_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Dependency stopped, e.g. during shutdown (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal { .. } | ApiError::Unavailable { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Record validation failures
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            field: e.field().map(str::to_string),
            message: match e {
                CoreError::Validation { ref message, .. } => message.clone(),
                ref other => other.to_string(),
            },
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert channel errors to API errors
impl From<ChannelError> for ApiError {
    #[track_caller]
    fn from(e: ChannelError) -> Self {
        match e {
            ChannelError::InvalidChannelName { name, reason, .. } => ApiError::BadRequest {
                message: format!("Invalid channel name '{}': {}", name, reason),
                location: ErrorLocation::from(Location::caller()),
            },
            ChannelError::Decode {
                channel, source, ..
            } => ApiError::Validation {
                message: format!("Malformed {} record: {}", channel, source),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            ChannelError::Validation { source, .. } => ApiError::from(source),
            other => {
                log::error!("Channel error: {}", other);
                ApiError::Internal {
                    message: "Channel operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert server errors to API errors
impl From<ServerError> for ApiError {
    #[track_caller]
    fn from(e: ServerError) -> Self {
        match e {
            ServerError::UnknownFeed { name, .. } => ApiError::NotFound {
                message: format!("Feed {} not found", name),
                location: ErrorLocation::from(Location::caller()),
            },
            ServerError::DashboardClosed { .. } => ApiError::Unavailable {
                message: "Dashboard is not running".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            ServerError::Channel(source) => ApiError::from(source),
            other => {
                log::error!("Server error: {}", other);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
