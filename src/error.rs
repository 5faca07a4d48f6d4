//! Error types for the Income Validation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors are reserved for contract violations such as an unreadable
//! configuration file or a malformed request; business outcomes (threshold
//! misses, missing records, employer changes) are never errors and are
//! reported as [`IncomeValidationStatus`](crate::models::IncomeValidationStatus)
//! values instead.

use thiserror::Error;

/// The main error type for the Income Validation Engine.
///
/// # Example
///
/// ```
/// use income_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/validation.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/validation.yaml"
/// );
/// ```
#[derive(Debug, Error)]
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

    /// A validation request did not satisfy the request invariants.
    #[error("Invalid validation request: {message}")]
    InvalidRequest {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
