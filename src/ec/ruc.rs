//! RUC (Registro Único de Contribuyentes), the Ecuadorian taxpayer
//! registration number.
//!
//! Thirteen digits: a two-digit province, a third digit that selects
//! the sub-scheme (natural person, public entity or juridical person),
//! a scheme-specific check, and an establishment suffix that must not
//! be all zeros.

use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

use super::ci;

const PUBLIC_WEIGHTS: [u32; 9] = [3, 2, 7, 6, 5, 4, 3, 2, 1];
const JURIDICAL_WEIGHTS: [u32; 10] = [4, 3, 2, 7, 6, 5, 4, 3, 2, 1];

/// Strip spaces and dashes.
pub fn compact(number: &str) -> String {
    clean(number, " -")
}

fn check_province(code: &str) -> Result<(), ValidationError> {
    // Provinces 01..24, plus 30 for residents abroad and 50 for the
    // national register.
    let value = (code.as_bytes()[0] - b'0') * 10 + (code.as_bytes()[1] - b'0');
    if (1..=24).contains(&value) || value == 30 || value == 50 {
        return Ok(());
    }
    Err(ValidationError::InvalidComponent(format!(
        "unknown province code {code}"
    )))
}

/// Check that `number` is a valid RUC, returning the compact form.
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
    check_province(&number[..2])?;
    match number.as_bytes()[2] {
        b'0'..=b'5' => {
            // Natural person: a CI plus an establishment number.
            if &number[10..] == "000" {
                return Err(ValidationError::InvalidComponent(
                    "establishment number must not be 000".into(),
                ));
            }
            ci::validate(&number[..10])?;
        }
        b'6' => {
            // Public entity.
            if &number[9..] == "0000" {
                return Err(ValidationError::InvalidComponent(
                    "establishment number must not be 0000".into(),
                ));
            }
            if weighted::checksum(&number[..9], &PUBLIC_WEIGHTS, 11)? != 0 {
                return Err(ValidationError::InvalidChecksum(
                    "weighted sum is non-zero".into(),
                ));
            }
        }
        b'9' => {
            // Juridical person.
            if &number[10..] == "000" {
                return Err(ValidationError::InvalidComponent(
                    "establishment number must not be 000".into(),
                ));
            }
            if weighted::checksum(&number[..10], &JURIDICAL_WEIGHTS, 11)? != 0 {
                return Err(ValidationError::InvalidChecksum(
                    "weighted sum is non-zero".into(),
                ));
            }
        }
        _ => {
            return Err(ValidationError::InvalidComponent(
                "third digit must select a known scheme (0-5, 6 or 9)".into(),
            ));
        }
    }
    Ok(number)
}

/// True when `number` is a valid RUC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_juridical_numbers() {
        assert_eq!(validate("1792060346001").unwrap(), "1792060346001");
        assert_eq!(validate("1792060346-001").unwrap(), "1792060346001");
    }

    #[test]
    fn accepts_public_numbers() {
        assert_eq!(validate("1760001550001").unwrap(), "1760001550001");
    }

    #[test]
    fn accepts_natural_numbers() {
        // A valid CI followed by establishment 001.
        assert_eq!(validate("1714307103001").unwrap(), "1714307103001");
    }

    #[test]
    fn rejects_zero_establishment() {
        assert!(matches!(
            validate("1792060346000"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("1760001550000"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("1714307103000"),
            Err(ValidationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn rejects_bad_checksums() {
        // Juridical with a flipped digit.
        assert!(matches!(
            validate("1792060347001"),
            Err(ValidationError::InvalidChecksum(_))
        ));
        // Natural whose CI part fails Luhn.
        assert!(matches!(
            validate("1714307104001"),
            Err(ValidationError::InvalidChecksum(_))
        ));
    }

    #[test]
    fn rejects_bad_scheme_digit() {
        assert!(matches!(
            validate("1777060346001"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("1787060346001"),
            Err(ValidationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn rejects_bad_province() {
        assert!(matches!(
            validate("2592060346001"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert_eq!(check_province("30"), Ok(()));
        assert_eq!(check_province("50"), Ok(()));
    }

    #[test]
    fn rejects_bad_shape() {
        assert!(matches!(
            validate("179206034601"),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            validate("17920603460011"),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            validate("179206034600a"),
            Err(ValidationError::InvalidFormat(_))
        ));
    }
}
