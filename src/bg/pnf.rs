//! PNF (Личен номер на чужденец), the Bulgarian personal number of a
//! foreigner.
//!
//! Ten digits with a weighted mod-10 check digit; unlike the EGN it
//! embeds no birth date.

use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

const WEIGHTS: [u32; 9] = [21, 19, 17, 13, 11, 9, 7, 3, 1];

/// Strip spaces, dashes and dots.
pub fn compact(number: &str) -> String {
    clean(number, " -.")
}

/// Check digit for the first nine digits.
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    weighted::checksum(number, &WEIGHTS, 10)
}

/// Check that `number` is a valid PNF, returning the compact form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    if number.len() != 10 {
        return Err(ValidationError::InvalidLength(format!(
            "expected 10 digits, got {}",
            number.len()
        )));
    }
    let check = u32::from(number.as_bytes()[9] - b'0');
    if check != calc_check_digit(&number[..9])? {
        return Err(ValidationError::InvalidChecksum(
            "check digit does not match".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid PNF.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}
