//! ISO 7064 Mod 97, 10 check-digit algorithm.
//!
//! The pure-number variant used by IBAN: the whole digit string is taken
//! modulo 97 and a valid number leaves a residue of one. Letters are
//! first spelled out as two-digit values via [`to_base10`].

use crate::error::ValidationError;
use crate::text::isdigits;

/// Convert an alphanumeric string to digits, mapping `A`..`Z` (either
/// case) to `10`..`35` the way IBAN preparation does.
pub fn to_base10(value: &str) -> Result<String, ValidationError> {
    let mut out = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        match c {
            '0'..='9' => out.push(c),
            'A'..='Z' => out.push_str(&(c as u32 - 'A' as u32 + 10).to_string()),
            'a'..='z' => out.push_str(&(c as u32 - 'a' as u32 + 10).to_string()),
            _ => {
                return Err(ValidationError::InvalidFormat(
                    "value must be alphanumeric".into(),
                ));
            }
        }
    }
    Ok(out)
}

pub mod mod_97_10 {
    use super::*;

    /// Residue of `number` modulo 97, folded digit by digit so numbers
    /// of any length work without big integers.
    pub fn checksum(number: &str) -> Result<u32, ValidationError> {
        if !isdigits(number) {
            return Err(ValidationError::InvalidFormat(
                "number must contain only digits".into(),
            ));
        }
        let mut acc = 0u32;
        for b in number.bytes() {
            acc = (acc * 10 + u32::from(b - b'0')) % 97;
        }
        Ok(acc)
    }

    /// Check that `number` (including its two trailing check digits)
    /// leaves a residue of one.
    pub fn validate(number: &str) -> Result<(), ValidationError> {
        if checksum(number)? != 1 {
            return Err(ValidationError::InvalidChecksum(
                "mod 97,10 residue is not 1".into(),
            ));
        }
        Ok(())
    }

    /// True when `number` leaves a residue of one.
    pub fn is_valid(number: &str) -> bool {
        validate(number).is_ok()
    }

    /// Compute the two digits that must be appended to `number` to make
    /// it pass, zero-padded to width two.
    ///
    /// ```
    /// use kennung::checksum::iso7064::mod_97_10;
    ///
    /// assert_eq!(mod_97_10::calc_check_digits("12345").unwrap(), "20");
    /// assert!(mod_97_10::is_valid("1234520"));
    /// ```
    pub fn calc_check_digits(number: &str) -> Result<String, ValidationError> {
        let residue = checksum(number)?;
        // 9700 is a multiple of 97, added to keep the subtraction in range.
        Ok(format!("{:02}", (9700 + 98 - 100 * residue) % 97))
    }
}
