//! Error types for Affine core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and operator-facing hints.

use thiserror::Error;

/// Result type alias for Affine operations.
pub type Result<T> = std::result::Result<T, AffineError>;

/// Core error type for Affine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AffineError {
    /// Known-plaintext sample too short to solve for both parameters
    #[error("Need at least 2 characters to solve for a and b (got {found})")]
    InsufficientSample { found: usize },

    /// Sample character that is not part of the alphabet
    #[error("Invalid symbol '{symbol}' at position {position} of the sample")]
    InvalidSymbol { symbol: char, position: usize },

    /// Multiplier shares a factor with the modulus
    #[error("a = {a} has no modular inverse mod {modulus}")]
    NotInvertible { a: u32, modulus: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_invertible_message() {
        let err = AffineError::NotInvertible { a: 13, modulus: 26 };
        assert_eq!(err.to_string(), "a = 13 has no modular inverse mod 26");
    }

    #[test]
    fn test_insufficient_sample_message() {
        let err = AffineError::InsufficientSample { found: 1 };
        assert!(err.to_string().contains("at least 2 characters"));
    }
}
