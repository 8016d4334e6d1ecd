//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown configuration key.
    #[error("Unknown configuration key: {0}. Run `fincalc config list` for the available keys.")]
    UnknownConfigKey(String),

    /// A configuration value failed validation.
    #[error("Invalid value for {key}: {value}. Expected {expected}.")]
    InvalidConfigValue {
        /// Configuration key.
        key: String,
        /// Rejected value.
        value: String,
        /// What the key accepts.
        expected: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nothing to do for the given arguments.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}
