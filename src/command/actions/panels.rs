//! Solar panel commands (activate, deactivate)

use crate::command::Command;
use satcom_shared::{Satellite, SatelliteError};
use std::cell::RefCell;

/// Switch the solar panels on
#[derive(Debug)]
pub struct ActivatePanelsCommand<'a> {
    satellite: &'a RefCell<Satellite>,
}

impl<'a> ActivatePanelsCommand<'a> {
    pub fn new(satellite: &'a RefCell<Satellite>) -> Self {
        Self { satellite }
    }
}

impl Command for ActivatePanelsCommand<'_> {
    fn execute(&self) -> Result<(), SatelliteError> {
        self.satellite.borrow_mut().activate_panels();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ACTIVATE_PANELS"
    }
}

/// Switch the solar panels off
#[derive(Debug)]
pub struct DeactivatePanelsCommand<'a> {
    satellite: &'a RefCell<Satellite>,
}

impl<'a> DeactivatePanelsCommand<'a> {
    pub fn new(satellite: &'a RefCell<Satellite>) -> Self {
        Self { satellite }
    }
}

impl Command for DeactivatePanelsCommand<'_> {
    fn execute(&self) -> Result<(), SatelliteError> {
        self.satellite.borrow_mut().deactivate_panels();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DEACTIVATE_PANELS"
    }
}
