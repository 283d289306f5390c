//! Crate-level errors and I/O context helpers

use std::io;

use thiserror::Error;

use crate::exitcode;

/// Errors raised while running a command.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for command execution.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyticsError::Io { .. } => exitcode::IOERR,
            AnalyticsError::Config { .. } => exitcode::CONFIG,
        }
    }
}

/// Extension trait for converting `io::Result` to `AnalyticsResult` with context.
pub trait IoResultExt<T> {
    /// Describe what was being attempted when the I/O error happened.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", line).with_context("write to stdout")?;
    /// ```
    fn with_context(self, action: &str) -> AnalyticsResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> AnalyticsResult<T> {
        self.map_err(|e| AnalyticsError::io(action, e))
    }
}
