//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payroll.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The computation core only ever raises [`EngineError::InvalidInput`]; the
/// remaining variants come from configuration loading and lookups.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::invalid_input("start_time", "'25:00' is not a valid HH:MM time");
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'start_time': '25:00' is not a valid HH:MM time"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Wage group code was not found in the configuration.
    #[error("Wage group not found: {code}")]
    WageGroupNotFound {
        /// The wage group code that was not found.
        code: String,
    },

    /// Upstream data was malformed or out of range.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field holding the bad value.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::WageGroupNotFound { .. } => "WAGE_GROUP_NOT_FOUND",
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
