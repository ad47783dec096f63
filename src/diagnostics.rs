//! Diagnostic side channel
//!
//! The transformer and batch driver report progress and skipped rows through
//! a [`DiagnosticSink`] instead of writing to a display directly.

use std::cell::RefCell;

/// Receiver for human-readable, line-oriented diagnostics
pub trait DiagnosticSink {
    /// Report a progress or informational line
    fn emit(&self, message: &str);

    /// Report a failure; defaults to [`DiagnosticSink::emit`]
    fn emit_error(&self, message: &str) {
        self.emit(message);
    }
}

/// A sink that discards everything
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn emit(&self, _message: &str) {}
}

/// Forwards diagnostics to `tracing`
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn emit_error(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps diagnostics in memory, in emission order
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: RefCell<Vec<String>>,
    errors: RefCell<usize>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of messages sent through [`DiagnosticSink::emit_error`]
    pub fn error_count(&self) -> usize {
        *self.errors.borrow()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn emit_error(&self, message: &str) {
        *self.errors.borrow_mut() += 1;
        self.emit(message);
    }
}
