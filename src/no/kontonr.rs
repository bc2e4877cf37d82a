//! Konto nr., the Norwegian bank account number.
//!
//! Eleven digits (four-digit bank, two-digit account group, four-digit
//! customer, check digit), presented as `NNNN.NN.NNNNN`. Postgiro
//! accounts drop the leading `0000` and carry a seven-digit Luhn-checked
//! form instead. The eleven-digit form is the BBAN of a Norwegian IBAN.

use crate::checksum::iso7064::{self, mod_97_10};
use crate::checksum::{luhn, weighted};
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

const WEIGHTS: [u32; 10] = [6, 7, 8, 9, 4, 5, 6, 7, 8, 9];

/// Strip spaces, dots and dashes, then any leading postgiro `0000`.
pub fn compact(number: &str) -> String {
    let number = clean(number, " .-");
    let mut rest = number.as_str();
    while let Some(stripped) = rest.strip_prefix("0000") {
        rest = stripped.trim_start();
    }
    rest.to_string()
}

/// Check digit for the first ten digits of an eleven-digit number.
///
/// Returns 10 for bases that have no valid check digit.
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    weighted::checksum(number, &WEIGHTS, 11)
}

/// Check that `number` is a valid account number, returning the compact
/// form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    match number.len() {
        7 => luhn::validate(&number)?,
        11 => {
            let check = u32::from(number.as_bytes()[10] - b'0');
            if check != calc_check_digit(&number[..10])? {
                return Err(ValidationError::InvalidChecksum(
                    "check digit does not match".into(),
                ));
            }
        }
        n => {
            return Err(ValidationError::InvalidLength(format!(
                "expected 7 or 11 digits, got {n}"
            )));
        }
    }
    Ok(number)
}

/// True when `number` is a valid account number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Group a compact number as `NNNN.NN.NNNNN`, restoring the postgiro
/// zeros.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if !isdigits(&number) || number.len() > 11 {
        return number;
    }
    let number = format!("{number:0>11}");
    format!("{}.{}.{}", &number[..4], &number[4..6], &number[6..])
}

/// Convert a valid account number to its IBAN.
///
/// A single-space grouping style in the input is preserved:
/// `"8601 11 17947"` becomes `"NO93 8601 11 17947"`.
pub fn to_iban(number: &str) -> Result<String, ValidationError> {
    let account = validate(number)?;
    let check = mod_97_10::calc_check_digits(&format!("{account}{}", iso7064::to_base10("NO")?))?;
    if number.contains(' ') {
        Ok(format!("NO{check} {}", number.trim()))
    } else {
        Ok(format!("NO{check}{account}"))
    }
}

// ---------------------------------------------------------------------------
