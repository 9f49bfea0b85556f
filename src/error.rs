// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors reported by logx.
///
/// None of these are fatal to the program being logged. Logging entry points
/// that cannot resolve a location fall back to an un-prefixed line instead of
/// surfacing an error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogxError {
    /// The call stack has no frame at the requested depth.
    ///
    /// Trace walks use this to stop; it is the expected outcome once the top
    /// of the stack is reached.
    #[error("no stack frame at depth {skip}")]
    NoStackFrame { skip: usize },

    /// A configuration value could not be used.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The `log` facade already has a backend installed.
    #[error("a logger is already installed for the log facade")]
    LoggerAlreadySet,
}

impl From<log::SetLoggerError> for LogxError {
    fn from(_: log::SetLoggerError) -> Self {
        LogxError::LoggerAlreadySet
    }
}
