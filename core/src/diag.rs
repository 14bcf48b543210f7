//! Diagnostic sink: the trace stream for analysis, scoring and selection.
//!
//! RULE: Core code never logs through globals directly.
//! The invocation owns a sink and passes it down by reference.
//! `LogSink` forwards to the `log` facade; `CaptureSink` keeps messages
//! in memory so tests can assert on them.

use log::Level;
use std::cell::RefCell;

pub const LOG_TARGET: &str = "staff_router";

/// The operations core code may use to report what it is doing.
pub trait DiagnosticSink {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn error(&self, message: &str);

    /// Lets callers skip building expensive debug messages.
    fn debug_enabled(&self) -> bool {
        true
    }
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{message}");
    }

    fn debug_enabled(&self) -> bool {
        log::log_enabled!(target: LOG_TARGET, Level::Debug)
    }
}

/// Records every message with its level, in emission order.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: RefCell<Vec<(Level, String)>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records.borrow().iter().any(|(_, m)| m.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

impl DiagnosticSink for CaptureSink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
