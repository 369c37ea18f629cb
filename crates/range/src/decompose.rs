//! Base-u digit decomposition

use ark_ff::One;
use zkrp_core::{Result, Scalar, ZkrpError};

/// Upper bound base^num_digits of the representable interval, or `None`
/// when it exceeds the u128 range
pub fn range_bound(base: u64, num_digits: usize) -> Option<u128> {
    u32::try_from(num_digits)
        .ok()
        .and_then(|exp| (base as u128).checked_pow(exp))
}

/// Decomposes `value` into `num_digits` base-`base` digits, least
/// significant first, so that `value = Σ digits[i] · base^i`.
///
/// Values outside `[0, base^num_digits)` are rejected with a range error,
/// never truncated.
pub fn decompose(value: u64, base: u64, num_digits: usize) -> Result<Vec<u64>> {
    if base == 0 {
        return Err(ZkrpError::InvalidParameters(
            "digit base must be positive".into(),
        ));
    }
    if num_digits == 0 {
        return Err(ZkrpError::InvalidParameters(
            "digit count must be positive".into(),
        ));
    }
    if let Some(bound) = range_bound(base, num_digits) {
        if value as u128 >= bound {
            return Err(ZkrpError::OutOfRange {
                value,
                base,
                num_digits,
            });
        }
    }

    let mut digits = Vec::with_capacity(num_digits);
    let mut rest = value;
    for _ in 0..num_digits {
        digits.push(rest % base);
        rest /= base;
    }
    Ok(digits)
}

/// Recomposes least-significant-first digits: `Σ digits[i] · base^i`
pub fn recompose(digits: &[u64], base: u64) -> u64 {
    let mut value = 0u64;
    for &digit in digits.iter().rev() {
        value = value * base + digit;
    }
    value
}

/// Powers 1, u, u^2, ... of the digit base in the scalar field
pub(crate) fn positional_weights(base: u64, num_digits: usize) -> Vec<Scalar> {
    let base_scalar = Scalar::from(base);
    let mut weights = Vec::with_capacity(num_digits);
    let mut weight = Scalar::one();
    for _ in 0..num_digits {
        weights.push(weight);
        weight *= base_scalar;
    }
    weights
}
