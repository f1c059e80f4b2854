//! Errors raised by satellite operations

use thiserror::Error;

/// Errors that can occur while commanding the satellite
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SatelliteError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl SatelliteError {
    /// Error for a rotation request without a direction
    pub fn empty_direction() -> Self {
        Self::InvalidArgument("Direction cannot be null or empty.".into())
    }
}
