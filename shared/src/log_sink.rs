//! Log sink abstraction
//!
//! The satellite never talks to a global logger. It owns a sink that accepts
//! leveled text messages; the binary plugs in [`TracingSink`], tests plug in
//! [`RecordingSink`] and inspect what was emitted.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Destination for leveled log messages
pub trait LogSink {
    /// Emit a message at the given severity
    fn log(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warning, message);
    }
}

/// Forwards messages to the `tracing` subscriber installed by the process
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "satellite", "{}", message),
            Severity::Warning => warn!(target: "satellite", "{}", message),
        }
    }
}

/// A single captured log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

/// Captures messages in memory
///
/// Clones share the same buffer, so a test can keep one handle while the
/// satellite owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages logged at warning severity
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .map(|e| e.message.clone())
            .collect()
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<String> {
        self.entries.borrow().last().map(|e| e.message.clone())
    }
}

impl LogSink for RecordingSink {
    fn log(&self, severity: Severity, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            severity,
            message: message.to_string(),
        });
    }
}
