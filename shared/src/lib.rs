//! Satellite Shared Types
//!
//! This crate provides the satellite receiver, its log sink abstraction and
//! the error type shared by every command that drives it.

pub mod error;
pub mod log_sink;
pub mod satellite;

pub use error::SatelliteError;
pub use log_sink::{LogEntry, LogSink, RecordingSink, Severity, TracingSink};
pub use satellite::{Satellite, SatelliteConfig, StatusReport};

/// Default values for a freshly launched satellite
pub mod defaults {
    /// Orientation the satellite reports before any rotation
    pub const INITIAL_ORIENTATION: &str = "North";

    /// Units added to the data counter per successful collection
    pub const DATA_COLLECTION_STEP: u32 = 10;
}
