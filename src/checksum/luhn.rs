//! Luhn (mod 10) check-digit algorithm.
//!
//! Walking from the rightmost digit, every second digit is doubled and
//! the digits of the products are summed; a number is valid when the
//! total is divisible by ten. Used here for Ecuadorian CI numbers and
//! short Norwegian account numbers, and by far the most common
//! check-digit scheme in the wild (payment cards, IMEI).

use crate::error::ValidationError;
use crate::text::isdigits;

/// Luhn sum of `number` modulo 10. Zero means the number is valid.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    if !isdigits(number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    Ok(sum % 10)
}

/// Check that `number` (including its trailing check digit) passes the
/// Luhn algorithm.
pub fn validate(number: &str) -> Result<(), ValidationError> {
    if checksum(number)? != 0 {
        return Err(ValidationError::InvalidChecksum(
            "Luhn checksum is non-zero".into(),
        ));
    }
    Ok(())
}

/// True when `number` passes the Luhn algorithm.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Compute the digit that must be appended to `number` to make it pass.
///
/// ```
/// use kennung::checksum::luhn;
///
/// assert_eq!(luhn::calc_check_digit("7992739871").unwrap(), 3);
/// assert!(luhn::is_valid("79927398713"));
/// ```
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    let shifted = format!("{number}0");
    Ok((10 - checksum(&shifted)?) % 10)
}
