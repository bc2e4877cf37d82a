//! Weighted-sum checksums.
//!
//! Most national schemes boil down to "multiply each digit by a fixed
//! weight, sum, reduce modulo m". This module holds the one fold they
//! all share; the per-country weight vectors and the interpretation of
//! the residue stay with the country modules.

use crate::error::ValidationError;
use crate::text::isdigits;

/// Sum of `digit[i] * weights[i]` over `number`, reduced modulo `modulus`.
///
/// Weights are applied left to right and `number` may be shorter than
/// the weight vector, never longer.
pub fn checksum(number: &str, weights: &[u32], modulus: u32) -> Result<u32, ValidationError> {
    if !isdigits(number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    if number.len() > weights.len() {
        return Err(ValidationError::InvalidLength(format!(
            "expected at most {} digits, got {}",
            weights.len(),
            number.len()
        )));
    }
    let sum: u32 = number
        .bytes()
        .zip(weights)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    Ok(sum % modulus)
}
