//! CI (Cédula de identidad), the Ecuadorian personal identity code.
//!
//! Ten digits: a two-digit province, a third digit below six and a Luhn
//! check digit over the whole number.

use crate::checksum::luhn;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

/// Strip spaces and dashes.
pub fn compact(number: &str) -> String {
    clean(number, " -")
}

fn check_province(code: &str) -> Result<(), ValidationError> {
    // Provinces are numbered 01..24.
    let value = (code.as_bytes()[0] - b'0') * 10 + (code.as_bytes()[1] - b'0');
    if (1..=24).contains(&value) {
        return Ok(());
    }
    Err(ValidationError::InvalidComponent(format!(
        "unknown province code {code}"
    )))
}

/// Check that `number` is a valid CI, returning the compact form.
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
    check_province(&number[..2])?;
    if number.as_bytes()[2] > b'5' {
        return Err(ValidationError::InvalidComponent(
            "third digit must be below 6".into(),
        ));
    }
    luhn::validate(&number)?;
    Ok(number)
}

/// True when `number` is a valid CI.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}
