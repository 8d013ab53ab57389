//! Error types for the practitioner salary service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during classification lookup,
//! wizard progression, and salary calculation.

use thiserror::Error;

/// The main error type for the practitioner salary service.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use practitioner_salary::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "mainCategory".to_string(),
///     message: "Main category is required".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'mainCategory': Main category is required"
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

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required query argument was missing or blank.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// The classification store failed to answer a query.
    #[error("Storage failure: {message}")]
    StorageFailure {
        /// The underlying storage error message.
        message: String,
    },

    /// User input failed validation (e.g. experience out of range).
    #[error("Validation failed for '{field}': {message}")]
    ValidationError {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A wizard action is not allowed in the current step.
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        /// The wizard step the action was attempted from.
        from: String,
        /// The action that was attempted.
        action: String,
    },
}

impl EngineError {
    /// Shorthand for a missing or blank argument.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a failed input validation.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
