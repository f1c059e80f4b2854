//! Data collection command

use crate::command::Command;
use satcom_shared::{Satellite, SatelliteError};
use std::cell::RefCell;

/// Collect one batch of data
///
/// Never fails: with the panels off the satellite only logs a warning.
#[derive(Debug)]
pub struct CollectDataCommand<'a> {
    satellite: &'a RefCell<Satellite>,
}

impl<'a> CollectDataCommand<'a> {
    pub fn new(satellite: &'a RefCell<Satellite>) -> Self {
        Self { satellite }
    }
}

impl Command for CollectDataCommand<'_> {
    fn execute(&self) -> Result<(), SatelliteError> {
        self.satellite.borrow_mut().collect_data();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "COLLECT_DATA"
    }
}
