//! Command executor - dispatches commands and records completed ones

use super::Command;
use satcom_shared::SatelliteError;
use tracing::{debug, info, warn};

/// A command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    pub sequence_id: u64,
    pub name: &'static str,
}

/// Invokes commands without knowing their concrete type
#[derive(Debug, Default)]
pub struct CommandExecutor {
    sequence_id: u64,
    history: Vec<ExecutedCommand>,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence_id(&mut self) -> u64 {
        self.sequence_id += 1;
        self.sequence_id
    }

    /// Execute a single command
    ///
    /// Failures are logged and handed back unchanged; nothing is recorded for
    /// them.
    pub fn execute(&mut self, command: &dyn Command) -> Result<ExecutedCommand, SatelliteError> {
        let seq = self.next_sequence_id();
        debug!("Executing command: id={} name={}", seq, command.name());

        match command.execute() {
            Ok(()) => {
                let executed = ExecutedCommand {
                    sequence_id: seq,
                    name: command.name(),
                };
                info!("Command {} ({}) completed", seq, executed.name);
                self.history.push(executed.clone());
                Ok(executed)
            }
            Err(e) => {
                warn!("Command {} ({}) rejected: {}", seq, command.name(), e);
                Err(e)
            }
        }
    }

    /// Execute commands in order, stopping at the first failure
    ///
    /// The error carries no hint of which command failed. Callers that need
    /// that should loop over [`CommandExecutor::execute`] and attach the
    /// command name themselves, as `driver::run_mission` does.
    pub fn execute_all(&mut self, commands: &[&dyn Command]) -> Result<(), SatelliteError> {
        for command in commands {
            self.execute(*command)?;
        }
        Ok(())
    }

    /// Number of commands that completed
    pub fn executed_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[ExecutedCommand] {
        &self.history
    }
}
