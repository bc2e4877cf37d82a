//! CPF (Cédula de Persona Física), the Costa Rican physical-person ID.
//!
//! Presented as `0P-TTTT-AAAA` (province, tome, entry). The compact
//! form is ten digits; dash-separated parts are zero-filled to widths
//! 2, 4 and 4 and a bare nine-digit number gains a leading zero. There
//! is no check digit.

use crate::error::ValidationError;
use crate::text::{clean, isdigits};

/// Normalize to the ten-digit form.
///
/// `"3-0455-0175"` zero-fills to `"0304550175"`; an undashed nine-digit
/// number is taken as missing its leading zero.
pub fn compact(number: &str) -> String {
    let number = clean(number, " ");
    let number = if number.contains('-') {
        let parts: Vec<&str> = number.split('-').collect();
        if let [province, tome, entry] = parts.as_slice() {
            return format!("{province:0>2}{tome:0>4}{entry:0>4}");
        }
        parts.concat()
    } else {
        number
    };
    if number.len() == 9 && isdigits(&number) {
        return format!("0{number}");
    }
    number
}

/// Check that `number` is a valid CPF, returning the compact form.
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
    if !number.starts_with('0') {
        return Err(ValidationError::InvalidComponent(
            "number must start with 0".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid CPF.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Group a compact number as `NN-NNNN-NNNN`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 10 && isdigits(&number) {
        format!("{}-{}-{}", &number[..2], &number[2..6], &number[6..])
    } else {
        number
    }
}

// ---------------------------------------------------------------------------
