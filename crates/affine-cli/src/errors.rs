//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes and
//! carry an optional hint for the operator.

use std::fmt;

use affine_core::AffineError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Key cannot be inverted
    NotInvertible { message: String, hint: String },

    /// Config file problems
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::NotInvertible { message, .. } => write!(f, "{}", message),
            CliError::Config(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }

    /// Hint shown under the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::NotInvertible { hint, .. } => Some(hint),
            CliError::Config(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::NotInvertible { .. } => exit_codes::NOT_INVERTIBLE,
            CliError::Config(_) => exit_codes::CONFIG,
        }
    }
}

impl From<AffineError> for CliError {
    fn from(err: AffineError) -> Self {
        let message = err.to_string();
        match err {
            AffineError::InsufficientSample { .. } => CliError::invalid_input_with_hint(
                message,
                "Paste the full ciphertext the server returned for ABC.",
            ),
            AffineError::InvalidSymbol { .. } => CliError::invalid_input_with_hint(
                message,
                "The sample should only contain the letters A-Z.",
            ),
            AffineError::NotInvertible { .. } => CliError::NotInvertible {
                message,
                hint: "Reconnect to the challenge to get a new key pair, then try again."
                    .to_string(),
            },
        }
    }
}

/// Resolve the exit code and hint for any error reaching `main`.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    if let Some(core_err) = err.downcast_ref::<AffineError>() {
        let cli_err = CliError::from(core_err.clone());
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    (1, None)
}
