//! # Affine Core
//!
//! Core library for Affine - a known-plaintext solver for affine substitution
//! ciphers over the 26-letter Latin alphabet.
//!
//! This crate holds the arithmetic and cipher logic, independent of the CLI.
//!
//! ## Architecture
//!
//! - **alphabet**: Symbol/index bijection and input normalization
//! - **modular**: gcd and modular inverse (extended Euclid plus linear scan)
//! - **cipher**: `AffineKey` with encryption and decryption
//! - **recovery**: Key recovery from the encryption of "ABC"
//! - **solver**: End-to-end solve producing a `Solution`

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod modular;
pub mod recovery;
pub mod solver;

pub use alphabet::{normalize, Alphabet, LATIN};
pub use cipher::AffineKey;
pub use error::{AffineError, Result};
pub use modular::{gcd, is_invertible, mod_inverse, mod_inverse_scan};
pub use recovery::{recover_key, verify_sample, KNOWN_PLAINTEXT};
pub use solver::{solve, solve_with_key, Solution};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
