//! Command execution infrastructure for the satellite
//!
//! This module handles:
//! - The uniform `Command` capability every action implements
//! - The concrete actions bound to a satellite
//! - Dispatching commands and logging their outcome

mod executor;
pub mod actions;

pub use actions::{
    ActivatePanelsCommand, CollectDataCommand, DeactivatePanelsCommand, RotateCommand,
};
pub use executor::{CommandExecutor, ExecutedCommand};

use satcom_shared::SatelliteError;

/// A deferred action bound to a satellite
///
/// Implementors capture the receiver and any parameters when they are built;
/// `execute` applies the action.
pub trait Command {
    /// Apply the action to the bound satellite
    fn execute(&self) -> Result<(), SatelliteError>;

    /// Short name used when logging dispatch
    fn name(&self) -> &'static str;
}
