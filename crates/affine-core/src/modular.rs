//! Modular arithmetic helpers.
//!
//! `mod_inverse` uses the extended Euclidean algorithm and works for any
//! modulus. `mod_inverse_scan` walks `1..m` and is only practical for small
//! moduli; it stays around as a cross-check.

/// Greatest common divisor.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Whether `a` has a multiplicative inverse mod `m`.
pub fn is_invertible(a: u32, m: u32) -> bool {
    mod_inverse(a, m).is_some()
}

/// Modular multiplicative inverse of `a` mod `m`.
///
/// Returns the unique `x` in `[1, m)` with `(a * x) % m == 1`, or `None`
/// when `gcd(a, m) != 1` or `m <= 1`.
pub fn mod_inverse(a: u32, m: u32) -> Option<u32> {
    if m <= 1 {
        return None;
    }
    let m = i64::from(m);
    let (mut old_r, mut r) = (i64::from(a) % m, m);
    let (mut old_s, mut s) = (1_i64, 0_i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m) as u32)
}

/// Linear-scan modular inverse over `1..m`.
pub fn mod_inverse_scan(a: u32, m: u32) -> Option<u32> {
    let a = u64::from(a);
    (1..m).find(|&x| (a * u64::from(x)) % u64::from(m) == 1)
}
