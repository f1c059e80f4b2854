//! Satellite Receiver
//!
//! Holds the satellite state and the operations commands act on. The state is
//! three independent axes: orientation (any non-empty label), the solar panel
//! flag, and a data counter that only grows while the panels are active.

use crate::{defaults, LogSink, SatelliteError};
use std::fmt;

/// Initial state and collection step of a satellite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteConfig {
    pub initial_orientation: String,
    pub data_step: u32,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            initial_orientation: defaults::INITIAL_ORIENTATION.into(),
            data_step: defaults::DATA_COLLECTION_STEP,
        }
    }
}

/// Point-in-time copy of the satellite state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub orientation: String,
    pub solar_panels_active: bool,
    pub data_collected: u32,
}

impl StatusReport {
    fn panels_label(&self) -> &'static str {
        if self.solar_panels_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Satellite Status -----")?;
        writeln!(f, "Orientation: {}", self.orientation)?;
        writeln!(f, "Solar Panels: {}", self.panels_label())?;
        write!(f, "Data Collected: {}", self.data_collected)
    }
}

/// The command receiver
pub struct Satellite {
    orientation: String,
    solar_panels_active: bool,
    data_collected: u32,
    data_step: u32,
    sink: Box<dyn LogSink>,
}

impl Satellite {
    /// Create a satellite with default state
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        Self::build(SatelliteConfig::default(), sink)
    }

    /// Create a satellite from an explicit configuration
    pub fn with_config(
        config: SatelliteConfig,
        sink: Box<dyn LogSink>,
    ) -> Result<Self, SatelliteError> {
        if config.initial_orientation.is_empty() {
            return Err(SatelliteError::InvalidArgument(
                "Initial orientation cannot be empty.".into(),
            ));
        }
        // A zero step would log successful collections that never count
        if config.data_step == 0 {
            return Err(SatelliteError::InvalidArgument(
                "Data collection step must be positive.".into(),
            ));
        }
        Ok(Self::build(config, sink))
    }

    fn build(config: SatelliteConfig, sink: Box<dyn LogSink>) -> Self {
        let satellite = Self {
            orientation: config.initial_orientation,
            solar_panels_active: false,
            data_collected: 0,
            data_step: config.data_step,
            sink,
        };
        satellite.log_initialized();
        satellite
    }

    pub fn orientation(&self) -> &str {
        &self.orientation
    }

    pub fn solar_panels_active(&self) -> bool {
        self.solar_panels_active
    }

    pub fn data_collected(&self) -> u32 {
        self.data_collected
    }

    /// Point the satellite in a new direction
    ///
    /// Any non-empty label is accepted. On error the orientation is untouched.
    pub fn rotate(&mut self, direction: &str) -> Result<(), SatelliteError> {
        if direction.is_empty() {
            self.sink.warn("Invalid rotation command!");
            return Err(SatelliteError::empty_direction());
        }
        self.orientation = direction.to_string();
        self.sink.info(&format!("Satellite rotated to {}", direction));
        Ok(())
    }

    pub fn activate_panels(&mut self) {
        self.solar_panels_active = true;
        self.sink.info("Solar Panels Activated");
    }

    pub fn deactivate_panels(&mut self) {
        self.solar_panels_active = false;
        self.sink.info("Solar Panels Deactivated");
    }

    /// Collect one batch of data
    ///
    /// Inactive panels are not an error: a warning is logged and the counter
    /// stays where it is.
    pub fn collect_data(&mut self) {
        if !self.solar_panels_active {
            self.sink.warn("Cannot collect data! Solar panels are inactive.");
            return;
        }
        self.data_collected = self.data_collected.saturating_add(self.data_step);
        self.sink
            .info(&format!("Data Collected: {} units", self.data_collected));
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            orientation: self.orientation.clone(),
            solar_panels_active: self.solar_panels_active,
            data_collected: self.data_collected,
        }
    }

    /// Write the status report to stdout
    pub fn print_status(&self) {
        println!("{}", self.status());
    }

    fn log_initialized(&self) {
        let status = self.status();
        self.sink.info(&format!(
            "Satellite initialized: Orientation={}, Solar Panels={}, Data Collected={}",
            status.orientation,
            status.panels_label(),
            status.data_collected
        ));
    }
}

impl fmt::Debug for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satellite")
            .field("orientation", &self.orientation)
            .field("solar_panels_active", &self.solar_panels_active)
            .field("data_collected", &self.data_collected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingSink, Severity};

    fn recorded() -> (Satellite, RecordingSink) {
        let sink = RecordingSink::new();
        (Satellite::new(Box::new(sink.clone())), sink)
    }

    #[test]
    fn test_initial_state() {
        let (sat, sink) = recorded();
        assert_eq!(sat.orientation(), "North");
        assert!(!sat.solar_panels_active());
        assert_eq!(sat.data_collected(), 0);
        let expected =
            "Satellite initialized: Orientation=North, Solar Panels=Inactive, Data Collected=0";
        assert_eq!(sink.last_message().as_deref(), Some(expected));
    }

    #[test]
    fn test_rotate_accepts_any_label() {
        let (mut sat, sink) = recorded();

        for direction in ["South", "East", "towards Jupiter", " "] {
            assert!(sat.rotate(direction).is_ok());
            assert_eq!(sat.orientation(), direction);
        }
        assert_eq!(sink.last_message().as_deref(), Some("Satellite rotated to  "));
    }

    #[test]
    fn test_rotate_empty_is_rejected() {
        let (mut sat, sink) = recorded();
        sat.rotate("West").unwrap();

        let result = sat.rotate("");
        assert!(matches!(result, Err(SatelliteError::InvalidArgument(_))));
        assert_eq!(sat.orientation(), "West");
        assert_eq!(sink.warnings(), vec!["Invalid rotation command!".to_string()]);
    }

    #[test]
    fn test_panels_are_idempotent() {
        let (mut sat, _sink) = recorded();

        sat.activate_panels();
        sat.activate_panels();
        assert!(sat.solar_panels_active());

        sat.deactivate_panels();
        sat.deactivate_panels();
        assert!(!sat.solar_panels_active());
    }

    #[test]
    fn test_collect_data_steps_by_ten() {
        let (mut sat, sink) = recorded();
        sat.activate_panels();

        sat.collect_data();
        assert_eq!(sat.data_collected(), 10);
        assert_eq!(sink.last_message().as_deref(), Some("Data Collected: 10 units"));

        sat.collect_data();
        assert_eq!(sat.data_collected(), 20);
    }

    #[test]
    fn test_collect_data_with_inactive_panels() {
        let (mut sat, sink) = recorded();

        sat.collect_data();
        assert_eq!(sat.data_collected(), 0);

        let last = sink.entries().pop().unwrap();
        assert_eq!(last.severity, Severity::Warning);
        assert_eq!(last.message, "Cannot collect data! Solar panels are inactive.");
    }

    #[test]
    fn test_deactivated_panels_gate_collection() {
        let (mut sat, _sink) = recorded();

        sat.activate_panels();
        sat.deactivate_panels();
        sat.collect_data();
        assert_eq!(sat.data_collected(), 0);
    }

    #[test]
    fn test_orientation_independent_of_panels() {
        let (mut sat, _sink) = recorded();

        sat.activate_panels();
        sat.collect_data();
        sat.rotate("South").unwrap();
        sat.collect_data();

        assert_eq!(sat.orientation(), "South");
        assert_eq!(sat.data_collected(), 20);
    }

    #[test]
    fn test_status_report_format() {
        let (mut sat, _sink) = recorded();
        sat.rotate("South").unwrap();
        sat.activate_panels();
        sat.collect_data();

        let report = sat.status();
        assert_eq!(
            report.to_string(),
            "----- Satellite Status -----\n\
             Orientation: South\n\
             Solar Panels: Active\n\
             Data Collected: 10"
        );
    }

    #[test]
    fn test_status_is_pure_read() {
        let (sat, sink) = recorded();
        let before = sink.entries().len();

        let first = sat.status();
        let second = sat.status();

        assert_eq!(first, second);
        assert_eq!(sink.entries().len(), before);
    }

    #[test]
    fn test_with_config() {
        let sink = RecordingSink::new();
        let config = SatelliteConfig {
            initial_orientation: "Zenith".into(),
            ..Default::default()
        };
        let mut sat = Satellite::with_config(config, Box::new(sink.clone())).unwrap();
        assert_eq!(sat.orientation(), "Zenith");

        sat.activate_panels();
        sat.collect_data();
        assert_eq!(sat.data_collected(), 10);
    }

    #[test]
    fn test_with_config_rejects_empty_orientation() {
        let config = SatelliteConfig {
            initial_orientation: String::new(),
            ..Default::default()
        };
        let result = Satellite::with_config(config, Box::new(RecordingSink::new()));
        assert!(matches!(result, Err(SatelliteError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_config_rejects_zero_step() {
        let sink = RecordingSink::new();
        let config = SatelliteConfig {
            data_step: 0,
            ..Default::default()
        };
        let result = Satellite::with_config(config, Box::new(sink.clone()));
        assert!(matches!(result, Err(SatelliteError::InvalidArgument(_))));
        assert!(sink.entries().is_empty());
    }
}
