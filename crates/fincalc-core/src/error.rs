//! Error types for the FinCalc library.
//!
//! Formulas validate their inputs up front and report a structured error
//! instead of letting `NaN` or infinity leak into results.

use thiserror::Error;

/// A specialized Result type for FinCalc operations.
pub type FinCalcResult<T> = Result<T, FinCalcError>;

/// The main error type for FinCalc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinCalcError {
    /// A parameter is missing, non-finite, or outside the formula's domain.
    #[error("Invalid input: {parameter}{} - {reason}", describe_value(.value))]
    InvalidInput {
        /// Name of the offending parameter.
        parameter: String,
        /// The rejected value, if one could be read.
        value: Option<f64>,
        /// Why the value was rejected.
        reason: String,
    },

    /// Finite inputs produced a non-finite result (overflow).
    #[error("Result is not finite: {quantity}")]
    NonFiniteResult {
        /// The quantity that overflowed.
        quantity: String,
    },

    /// No calculator is registered under this name.
    #[error("Unknown calculator: {name}")]
    UnknownCalculator {
        /// The name that failed to resolve.
        name: String,
    },
}

impl FinCalcError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(parameter: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            value: Some(value),
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error for a parameter whose value could not be read.
    #[must_use]
    pub fn malformed(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            value: None,
            reason: reason.into(),
        }
    }

    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(quantity: impl Into<String>) -> Self {
        Self::NonFiniteResult {
            quantity: quantity.into(),
        }
    }

    /// Creates an unknown calculator error.
    #[must_use]
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        Self::UnknownCalculator { name: name.into() }
    }

    /// Returns true if the error was caused by caller-supplied input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::NonFiniteResult { .. })
    }
}

fn describe_value(value: &Option<f64>) -> String {
    value.map(|v| format!(" = {v}")).unwrap_or_default()
}
