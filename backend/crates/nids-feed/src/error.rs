use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed capacity must be greater than zero {location}")]
    ZeroCapacity { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, FeedError>;
