//! Known-plaintext key recovery.
//!
//! With the plaintext "ABC", the first ciphertext symbol is `a*0 + b = b`
//! and the second is `a*1 + b`, so both parameters fall out directly.

use crate::alphabet::{normalize, LATIN};
use crate::cipher::AffineKey;
use crate::error::{AffineError, Result};

/// Plaintext the operator asks the challenge to encrypt.
pub const KNOWN_PLAINTEXT: &str = "ABC";

/// Recover `(a, b)` from the encryption of "AB…".
///
/// The sample is normalized first. Only the first two characters are used
/// for the solve.
///
/// # Errors
///
/// - `InsufficientSample` when fewer than 2 characters remain.
/// - `InvalidSymbol` when one of the first two is not a letter.
pub fn recover_key(sample: &str) -> Result<AffineKey> {
    let sample = normalize(sample);
    let found = sample.chars().count();
    if found < 2 {
        return Err(AffineError::InsufficientSample { found });
    }

    let mut indices = [0_u32; 2];
    for (position, symbol) in sample.chars().take(2).enumerate() {
        indices[position] = LATIN
            .index_of(symbol)
            .ok_or(AffineError::InvalidSymbol { symbol, position })?;
    }

    let m = LATIN.modulus();
    let b = indices[0];
    let a = (indices[1] + m - b) % m;
    tracing::debug!(sample = %sample, a, b, "recovered key");

    Ok(AffineKey::new(a, b))
}

/// Check the rest of the sample against what `key` would produce.
///
/// Returns `None` when the sample has nothing beyond the two characters
/// used for recovery, otherwise whether every extra character matches the
/// encryption of the known plaintext.
pub fn verify_sample(key: &AffineKey, sample: &str) -> Option<bool> {
    let sample = normalize(sample);
    if sample.chars().count() <= 2 {
        return None;
    }
    let expected = key.encrypt(KNOWN_PLAINTEXT);
    let consistent = sample
        .chars()
        .zip(expected.chars())
        .skip(2)
        .all(|(got, want)| got == want)
        && sample.chars().count() == expected.chars().count();
    if !consistent {
        tracing::debug!(sample = %sample, expected = %expected, "sample does not match recovered key");
    }
    Some(consistent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_every_invertible_key() {
        for a in 0..26 {
            for b in 0..26 {
                let key = AffineKey::new(a, b);
                if !key.is_invertible() {
                    continue;
                }
                let sample = key.encrypt("AB");
                assert_eq!(recover_key(&sample).unwrap(), key);
            }
        }
    }

    #[test]
    fn test_he_fixture() {
        let key = recover_key("HELLO").unwrap();
        assert_eq!(key.b, 7);
        assert_eq!(key.a, 23);
        let a_inv = key.inverse().unwrap();
        assert_eq!((23 * a_inv) % 26, 1);
    }

    #[test]
    fn test_normalizes_sample() {
        let key = recover_key("  ins \n").unwrap();
        assert_eq!(key, AffineKey::new(5, 8));
    }

    #[test]
    fn test_single_character_sample() {
        assert_eq!(
            recover_key("X").unwrap_err(),
            AffineError::InsufficientSample { found: 1 }
        );
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(
            recover_key("   ").unwrap_err(),
            AffineError::InsufficientSample { found: 0 }
        );
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            recover_key("I5S").unwrap_err(),
            AffineError::InvalidSymbol {
                symbol: '5',
                position: 1
            }
        );
    }

    #[test]
    fn test_recovery_may_yield_non_invertible_key() {
        // b = 0, a = 2
        let key = recover_key("AC").unwrap();
        assert_eq!(key, AffineKey::new(2, 0));
        assert!(!key.is_invertible());
    }

    #[test]
    fn test_verify_sample() {
        let key = AffineKey::new(5, 8);
        assert_eq!(verify_sample(&key, "INS"), Some(true));
        assert_eq!(verify_sample(&key, "INT"), Some(false));
        assert_eq!(verify_sample(&key, "INSX"), Some(false));
        assert_eq!(verify_sample(&key, "IN"), None);
    }
}
