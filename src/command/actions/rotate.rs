//! Rotation command

use crate::command::Command;
use satcom_shared::{Satellite, SatelliteError};
use std::cell::RefCell;

/// Rotate the satellite to a fixed direction
#[derive(Debug)]
pub struct RotateCommand<'a> {
    satellite: &'a RefCell<Satellite>,
    direction: String,
}

impl<'a> RotateCommand<'a> {
    pub fn new(satellite: &'a RefCell<Satellite>, direction: impl Into<String>) -> Self {
        Self {
            satellite,
            direction: direction.into(),
        }
    }
}

impl Command for RotateCommand<'_> {
    fn execute(&self) -> Result<(), SatelliteError> {
        self.satellite.borrow_mut().rotate(&self.direction)
    }

    fn name(&self) -> &'static str {
        "ROTATE"
    }
}
