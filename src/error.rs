//! Error types for the sickness benefit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. Input findings produced by the
//! validator are plain data (see [`crate::validation`]) and only become an
//! [`EngineError`] when a caller insists on converting raw input.

use thiserror::Error;

/// The main error type for the sickness benefit engine.
///
/// # Example
///
/// ```
/// use sickness_benefit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
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

    /// The rule set parsed but its tables are inconsistent.
    #[error("Invalid rule set: {message}")]
    InvalidConfig {
        /// What was wrong with the rule set.
        message: String,
    },

    /// Raw input failed a blocking validation rule.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// The validation message.
        message: String,
    },

    /// Normal net income is zero, so the maintenance rate is undefined.
    #[error("Normal net income is zero for gross salary {gross_salary}; maintenance rate is undefined")]
    ZeroNetIncome {
        /// The gross monthly salary that produced zero net income.
        gross_salary: i64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
