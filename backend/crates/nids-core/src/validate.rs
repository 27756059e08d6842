use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Schema checks a record must pass before it reaches a feed
pub trait Validate {
    fn validate(&self) -> CoreErrorResult<()>;
}

/// Check a string field's length bounds (in bytes)
#[track_caller]
pub fn validate_string(
    value: &str,
    field_name: &str,
    min_length: usize,
    max_length: usize,
) -> CoreErrorResult<()> {
    if value.trim().len() < min_length {
        return Err(CoreError::Validation {
            message: format!("{} must be at least {} characters", field_name, min_length),
            field: Some(field_name.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if value.len() > max_length {
        return Err(CoreError::Validation {
            message: format!("{} must not exceed {} characters", field_name, max_length),
            field: Some(field_name.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Check a percentage is finite and within 0-100
#[track_caller]
pub fn validate_percent(value: f64, field_name: &str) -> CoreErrorResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation {
            message: format!("{} must be between 0 and 100, got {}", field_name, value),
            field: Some(field_name.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Check a rate is finite and non-negative
#[track_caller]
pub fn validate_rate(value: f64, field_name: &str) -> CoreErrorResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation {
            message: format!("{} must be a non-negative number, got {}", field_name, value),
            field: Some(field_name.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
