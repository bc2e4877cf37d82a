//! CNIC (Computerized National Identity Card number), the Pakistani
//! citizen ID.
//!
//! Thirteen digits presented as `NNNNN-NNNNNNN-N`: a five-digit
//! locality whose first digit names the province, a seven-digit family
//! serial and a final digit encoding gender. There is no check digit.

use crate::error::ValidationError;
use crate::text::{clean, isdigits};

/// Province names indexed by the first digit, 1 through 7.
const PROVINCES: [&str; 7] = [
    "Khyber Pakhtunkhwa",
    "FATA",
    "Punjab",
    "Sindh",
    "Balochistan",
    "Islamabad",
    "Gilgit-Baltistan",
];

/// Strip spaces and dashes.
pub fn compact(number: &str) -> String {
    clean(number, " -")
}

/// Gender from the last digit of a compact number: odd is `'M'`, even
/// is `'F'`.
///
/// Assumes compacted input; fails with `InvalidComponent` when there is
/// no trailing digit.
pub fn get_gender(number: &str) -> Result<char, ValidationError> {
    match number.bytes().last() {
        Some(b) if b.is_ascii_digit() => Ok(if (b - b'0') % 2 == 1 { 'M' } else { 'F' }),
        _ => Err(ValidationError::InvalidComponent(
            "number has no trailing gender digit".into(),
        )),
    }
}

/// Province name from the first digit of a compact number.
///
/// Assumes compacted input; fails with `InvalidComponent` when the
/// digit names no province.
pub fn get_province(number: &str) -> Result<&'static str, ValidationError> {
    match number.as_bytes().first() {
        Some(b @ b'1'..=b'7') => Ok(PROVINCES[usize::from(b - b'1')]),
        _ => Err(ValidationError::InvalidComponent(
            "first digit names no province".into(),
        )),
    }
}

/// Check that `number` is a valid CNIC, returning the compact form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    if number.len() != 13 {
        return Err(ValidationError::InvalidLength(format!(
            "expected 13 digits, got {}",
            number.len()
        )));
    }
    get_province(&number)?;
    Ok(number)
}

/// True when `number` is a valid CNIC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Group a compact number as `NNNNN-NNNNNNN-N`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 13 && isdigits(&number) {
        format!("{}-{}-{}", &number[..5], &number[5..12], &number[12..])
    } else {
        number
    }
}

// ---------------------------------------------------------------------------
