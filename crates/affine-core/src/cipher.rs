//! Affine substitution cipher over the Latin alphabet.
//!
//! Encryption maps index `x` to `(a*x + b) mod 26`; decryption maps `y` to
//! `a⁻¹ * (y - b) mod 26`. Characters outside the alphabet pass through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::LATIN;
use crate::error::{AffineError, Result};
use crate::modular::mod_inverse;

/// Affine cipher parameters.
///
/// `new` and deserialization reduce both parameters mod 26. A key built as a
/// struct literal may hold larger values; the index arithmetic reduces them
/// again, so such a key behaves like its reduced form.
///
/// A key may hold a non-invertible `a` (recovery can produce one from a
/// bad sample). Such a key still encrypts, but `inverse` and `decrypt` fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeyParams")]
pub struct AffineKey {
    pub a: u32,
    pub b: u32,
}

/// Wire form of a key before reduction.
#[derive(Deserialize)]
struct KeyParams {
    a: u32,
    b: u32,
}

impl From<KeyParams> for AffineKey {
    fn from(params: KeyParams) -> Self {
        Self::new(params.a, params.b)
    }
}

impl AffineKey {
    /// Build a key, reducing both parameters mod 26.
    pub fn new(a: u32, b: u32) -> Self {
        let m = LATIN.modulus();
        Self { a: a % m, b: b % m }
    }

    /// Build a key that is guaranteed to be decryptable.
    pub fn checked(a: u32, b: u32) -> Result<Self> {
        let key = Self::new(a, b);
        key.inverse()?;
        Ok(key)
    }

    /// Multiplicative inverse of `a` mod 26.
    pub fn inverse(&self) -> Result<u32> {
        let modulus = LATIN.modulus();
        let a = self.a % modulus;
        mod_inverse(a, modulus).ok_or(AffineError::NotInvertible { a, modulus })
    }

    pub fn is_invertible(&self) -> bool {
        self.inverse().is_ok()
    }

    /// Encrypt a single alphabet index.
    pub fn encrypt_index(&self, x: u32) -> u32 {
        let m = LATIN.modulus();
        ((self.a % m) * (x % m) + self.b % m) % m
    }

    /// Decrypt a single alphabet index given the precomputed inverse of `a`.
    pub fn decrypt_index(&self, y: u32, a_inverse: u32) -> u32 {
        let m = LATIN.modulus();
        // y - b without underflow
        let shifted = (y % m + m - self.b % m) % m;
        ((a_inverse % m) * shifted) % m
    }

    pub fn encrypt(&self, text: &str) -> String {
        text.chars()
            .map(|c| match LATIN.index_of(c) {
                Some(x) => LATIN.symbol_at(self.encrypt_index(x)),
                None => c,
            })
            .collect()
    }

    /// Decrypt `text`, passing non-alphabet characters through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AffineError::NotInvertible` when `a` has no inverse mod 26.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        let a_inverse = self.inverse()?;
        tracing::debug!(a = self.a, b = self.b, a_inverse, "decrypting");
        Ok(text
            .chars()
            .map(|c| match LATIN.index_of(c) {
                Some(y) => LATIN.symbol_at(self.decrypt_index(y, a_inverse)),
                None => c,
            })
            .collect())
    }
}

impl fmt::Display for AffineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {}, b = {}", self.a, self.b)
    }
}
