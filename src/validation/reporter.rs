//! Sinks for non-fatal compile warnings.
//!
//! The compiler never aborts on content warnings (unknown tile codes,
//! renumbered layer ids, dropped encounter groups). It hands them to a
//! `WarningReporter` instead, so callers choose where they go: the log, a
//! collected list for the CLI, or an assertion in a test.

use std::sync::{Mutex, PoisonError};

use super::warning::{Diagnostic, ValidationResult};

/// Receives recoverable content warnings during compilation.
///
/// Reporters may be shared by maps compiling on different threads, so
/// `report` takes `&self`.
pub trait WarningReporter: Send + Sync {
    fn report(&self, map_id: &str, warning: Diagnostic);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl WarningReporter for TracingReporter {
    fn report(&self, map_id: &str, warning: Diagnostic) {
        tracing::warn!(map_id, code = %warning.code, "{}", warning.message);
    }
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    warnings: Mutex<Vec<Diagnostic>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of warnings reported so far.
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain into a validation result.
    pub fn into_result(self) -> ValidationResult {
        self.warnings
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .collect()
    }
}

impl WarningReporter for CollectingReporter {
    fn report(&self, map_id: &str, warning: Diagnostic) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.with_map(map_id));
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl WarningReporter for NullReporter {
    fn report(&self, _map_id: &str, _warning: Diagnostic) {}
}
