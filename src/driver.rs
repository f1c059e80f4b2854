//! Mission driver - builds the fixed command sequence and runs it

use crate::command::{
    ActivatePanelsCommand, CollectDataCommand, Command, CommandExecutor, RotateCommand,
};
use anyhow::{Context, Result};
use satcom_shared::{Satellite, StatusReport};
use std::cell::RefCell;

/// Direction the default mission rotates to
pub const MISSION_DIRECTION: &str = "South";

/// Rotate, power up the panels and collect one batch of data
///
/// Returns the satellite status after the last command. The first failing
/// command aborts the rest of the sequence.
pub fn run_mission(satellite: &RefCell<Satellite>, direction: &str) -> Result<StatusReport> {
    let rotate = RotateCommand::new(satellite, direction);
    let activate_panels = ActivatePanelsCommand::new(satellite);
    let collect_data = CollectDataCommand::new(satellite);

    let mut executor = CommandExecutor::new();
    for command in [&rotate as &dyn Command, &activate_panels, &collect_data] {
        executor
            .execute(command)
            .with_context(|| format!("{} command failed", command.name()))?;
    }

    Ok(satellite.borrow().status())
}
