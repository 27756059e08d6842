use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid severity: {value} {location}")]
    InvalidSeverity {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid link state: {value} {location}")]
    InvalidLinkState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid attack action: {value} {location}")]
    InvalidAttackAction {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field that failed validation, if the error names one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
