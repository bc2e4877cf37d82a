//! IRD number, the New Zealand Inland Revenue Department taxpayer ID.
//!
//! Eight or nine digits in the range assigned by Inland Revenue, with a
//! weighted mod-11 check digit and a secondary weight set for bases the
//! primary weights cannot close.

use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

const PRIMARY_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const SECONDARY_WEIGHTS: [u32; 8] = [7, 4, 3, 2, 5, 2, 7, 6];

/// Strip separators and any leading `NZ` prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, " -").to_ascii_uppercase();
    let mut rest = number.as_str();
    while let Some(stripped) = rest.strip_prefix("NZ") {
        rest = stripped.trim_start();
    }
    rest.to_string()
}

/// Check digit for the check-less part, left-padded to eight digits.
///
/// Fails with `InvalidChecksum` when neither weight set closes the base.
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    let padded = format!("{number:0>8}");
    let check = (11 - weighted::checksum(&padded, &PRIMARY_WEIGHTS, 11)?) % 11;
    if check != 10 {
        return Ok(check);
    }
    let check = (11 - weighted::checksum(&padded, &SECONDARY_WEIGHTS, 11)?) % 11;
    if check != 10 {
        return Ok(check);
    }
    Err(ValidationError::InvalidChecksum(
        "no check digit closes this base".into(),
    ))
}

/// Check that `number` is a valid IRD number, returning the compact form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    if !(8..=9).contains(&number.len()) {
        return Err(ValidationError::InvalidLength(format!(
            "expected 8 or 9 digits, got {}",
            number.len()
        )));
    }
    let value: u64 = number
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'));
    if value <= 10_000_000 || value >= 150_000_000 {
        return Err(ValidationError::InvalidComponent(
            "value is outside the assigned IRD range".into(),
        ));
    }
    let check = u32::from(number.as_bytes()[number.len() - 1] - b'0');
    if check != calc_check_digit(&number[..number.len() - 1])? {
        return Err(ValidationError::InvalidChecksum(
            "check digit does not match".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid IRD number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Group a compact number in 2-3-3 or 3-3-3 form, e.g. `NN-NNN-NNN`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if !isdigits(&number) || !(8..=9).contains(&number.len()) {
        return number;
    }
    let split = number.len() - 6;
    format!(
        "{}-{}-{}",
        &number[..split],
        &number[split..split + 3],
        &number[split + 3..]
    )
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_numbers() {
        assert_eq!(validate("49091850").unwrap(), "49091850");
        assert_eq!(validate("4909185-0").unwrap(), "49091850");
        assert_eq!(validate("NZ 49-091-850").unwrap(), "49091850");
        // Nine digits exercise the secondary weights.
        assert_eq!(validate("136410132").unwrap(), "136410132");
    }

    #[test]
    fn rejects_bad_checksum() {
        assert!(matches!(
            validate("136410133"),
            Err(ValidationError::InvalidChecksum(_))
        ));
        assert!(matches!(
            validate("49091851"),
            Err(ValidationError::InvalidChecksum(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            validate("09125568"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("150000000"),
            Err(ValidationError::InvalidComponent(_))
        ));
        assert!(matches!(
            validate("10000000"),
            Err(ValidationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn rejects_bad_shape() {
        assert!(matches!(
            validate("4909185"),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            validate("4909185123"),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            validate("4909185o"),
            Err(ValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn formats_by_group() {
        assert_eq!(format("49091850"), "49-091-850");
        assert_eq!(format("136410132"), "136-410-132");
        assert_eq!(format("4909185"), "4909185");
    }

    #[test]
    fn check_digit_calculation() {
        assert_eq!(calc_check_digit("4909185").unwrap(), 0);
        assert_eq!(calc_check_digit("13641013").unwrap(), 2);
    }
}
