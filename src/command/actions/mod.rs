//! Concrete satellite commands

mod collect;
mod panels;
mod rotate;

pub use collect::CollectDataCommand;
pub use panels::{ActivatePanelsCommand, DeactivatePanelsCommand};
pub use rotate::RotateCommand;
