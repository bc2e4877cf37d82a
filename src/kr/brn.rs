//! BRN (사업자 등록 번호), the South Korean business registration number.
//!
//! Ten digits presented as `NNN-NN-NNNNN`: a district tax-office code,
//! a business-type class and a serial. Validation is structural only;
//! the issuing register reserves the low code ranges.

use crate::error::ValidationError;
use crate::text::{clean, isdigits};

/// Strip spaces and dashes.
pub fn compact(number: &str) -> String {
    clean(number, " -")
}

/// Check that `number` is a valid BRN, returning the compact form.
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
    if &number[..3] < "101" {
        return Err(ValidationError::InvalidComponent(
            "tax-office code must be at least 101".into(),
        ));
    }
    if &number[3..5] == "00" {
        return Err(ValidationError::InvalidComponent(
            "business-type class must not be 00".into(),
        ));
    }
    if &number[5..9] == "0000" {
        return Err(ValidationError::InvalidComponent(
            "serial must not be 0000".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid BRN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Group a compact number as `NNN-NN-NNNNN`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 10 && isdigits(&number) {
        format!("{}-{}-{}", &number[..3], &number[3..5], &number[5..])
    } else {
        number
    }
}
