//! SQL logging hooks
//!
//! Statements report their rendered SQL to a [`SqlLogger`] passed in by the
//! caller. Nothing is registered globally.

use std::sync::Mutex;

/// Receives every statement rendered through [`Statement::render`](crate::statement::Statement::render)
pub trait SqlLogger: Send + Sync {
    fn log_sql(&self, sql: &str);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl SqlLogger for NoopLogger {
    fn log_sql(&self, _sql: &str) {}
}

/// Forwards to the `log` crate at debug level under the `sb_core::sql` target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateLogger;

impl SqlLogger for LogCrateLogger {
    fn log_sql(&self, sql: &str) {
        log::debug!(target: "sb_core::sql", "{}", sql);
    }
}

/// Keeps every logged statement in memory
#[derive(Debug, Default)]
pub struct RecordingLogger {
    statements: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements logged so far, oldest first
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl SqlLogger for RecordingLogger {
    fn log_sql(&self, sql: &str) {
        if let Ok(mut statements) = self.statements.lock() {
            statements.push(sql.to_string());
        }
    }
}
