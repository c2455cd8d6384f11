//! End-to-end solve: recover the key, then decrypt the secret.

use serde::Serialize;

use crate::alphabet::normalize;
use crate::cipher::AffineKey;
use crate::error::Result;
use crate::recovery::{recover_key, verify_sample};

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    #[serde(flatten)]
    pub key: AffineKey,
    pub a_inverse: u32,
    pub plaintext: String,
    /// `None` when the sample had no characters beyond the first two.
    pub sample_consistent: Option<bool>,
}

/// Recover the key from `sample` and decrypt `secret` with it.
///
/// Both inputs are normalized (trimmed, upper-cased). Recovery errors are
/// returned before any decryption is attempted.
pub fn solve(secret: &str, sample: &str) -> Result<Solution> {
    let key = recover_key(sample)?;
    solve_with_key(key, secret, Some(sample))
}

/// Finish a solve for a key that was already recovered.
///
/// `sample` is checked against the key when given; pass `None` to skip the
/// check. The secret is normalized before decryption.
pub fn solve_with_key(key: AffineKey, secret: &str, sample: Option<&str>) -> Result<Solution> {
    let sample_consistent = sample.and_then(|s| verify_sample(&key, s));
    let a_inverse = key.inverse()?;
    let plaintext = key.decrypt(&normalize(secret))?;

    Ok(Solution {
        key,
        a_inverse,
        plaintext,
        sample_consistent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AffineError;

    #[test]
    fn test_solve_round_trip() {
        let key = AffineKey::new(11, 19);
        let secret = key.encrypt("GOUDA");
        let sample = key.encrypt("ABC");

        let solution = solve(&secret, &sample).unwrap();
        assert_eq!(solution.key, key);
        assert_eq!(solution.plaintext, "GOUDA");
        assert_eq!(solution.sample_consistent, Some(true));
        assert_eq!((11 * solution.a_inverse) % 26, 1);
    }

    #[test]
    fn test_solve_normalizes_secret() {
        let key = AffineKey::new(5, 8);
        let solution = solve("  ihhwvc swfrcp ", "ins").unwrap();
        assert_eq!(solution.key, key);
        assert_eq!(solution.plaintext, "AFFINE CIPHER");
    }

    #[test]
    fn test_solve_short_sample() {
        let err = solve("IHHWVC", "I").unwrap_err();
        assert_eq!(err, AffineError::InsufficientSample { found: 1 });
    }

    #[test]
    fn test_solve_not_invertible() {
        // b = 1, a = 13
        let err = solve("XYZ", "BO").unwrap_err();
        assert_eq!(err, AffineError::NotInvertible { a: 13, modulus: 26 });
    }

    #[test]
    fn test_solve_with_key_skips_check_without_sample() {
        let key = recover_key("INX").unwrap();
        let checked = solve_with_key(key, "maexi", Some("INX")).unwrap();
        assert_eq!(checked.sample_consistent, Some(false));

        let unchecked = solve_with_key(key, "maexi", None).unwrap();
        assert_eq!(unchecked.sample_consistent, None);
        assert_eq!(unchecked.plaintext, "GOUDA");
        assert_eq!(unchecked.a_inverse, 21);
    }

    #[test]
    fn test_solution_serializes_flat() {
        let solution = solve("INS", "INS").unwrap();
        let value = serde_json::to_value(&solution).unwrap();
        assert_eq!(value["a"], 5);
        assert_eq!(value["b"], 8);
        assert_eq!(value["a_inverse"], 21);
        assert_eq!(value["plaintext"], "ABC");
        assert_eq!(value["sample_consistent"], true);
    }
}
