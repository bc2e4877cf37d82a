//! ICE (Identifiant Commun de l'Entreprise), the Moroccan common
//! company identifier.
//!
//! Fifteen digits: a nine-digit company root, a four-digit
//! establishment suffix and two check digits chosen so the whole value
//! is divisible by 97.

use crate::checksum::iso7064::mod_97_10;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

/// Strip spaces and dashes.
pub fn compact(number: &str) -> String {
    clean(number, " -")
}

/// Check that `number` is a valid ICE, returning the compact form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    if number.len() != 15 {
        return Err(ValidationError::InvalidLength(format!(
            "expected 15 digits, got {}",
            number.len()
        )));
    }
    if mod_97_10::checksum(&number)? != 0 {
        return Err(ValidationError::InvalidChecksum(
            "value is not divisible by 97".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid ICE.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Left-pad a digit string to the fifteen-digit form.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if isdigits(&number) && number.len() < 15 {
        format!("{number:0>15}")
    } else {
        number
    }
}
