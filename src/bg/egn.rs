//! EGN (Единен граждански номер), the Bulgarian uniform civil number.
//!
//! Ten digits: a birth date in `YYMMDD` form with the century folded
//! into the month (21..=32 means born before 1900, 41..=52 after 1999),
//! a three-digit serial whose last digit encodes gender, and a weighted
//! mod-11 check digit.

use chrono::NaiveDate;

use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

const WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];

/// Strip spaces, dashes and dots.
pub fn compact(number: &str) -> String {
    clean(number, " -.")
}

/// Decode the birth date from the first six digits of a compact number.
///
/// Assumes compacted input. Fails with `InvalidComponent` when the
/// number does not begin with six digits or they name no real calendar
/// date.
pub fn get_birth_date(number: &str) -> Result<NaiveDate, ValidationError> {
    let Some(head) = number.get(..6).filter(|head| isdigits(head)) else {
        return Err(ValidationError::InvalidComponent(
            "number does not start with six date digits".into(),
        ));
    };
    let d = |i: usize| i32::from(head.as_bytes()[i] - b'0');
    let mut year = 1900 + d(0) * 10 + d(1);
    let mut month = d(2) * 10 + d(3);
    let day = d(4) * 10 + d(5);
    if (21..=32).contains(&month) {
        year -= 100;
        month -= 20;
    } else if (41..=52).contains(&month) {
        year += 100;
        month -= 40;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
        ValidationError::InvalidComponent(format!(
            "no such calendar date: {year:04}-{month:02}-{day:02}"
        ))
    })
}

/// Check digit for the first nine digits.
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    Ok(weighted::checksum(number, &WEIGHTS, 11)? % 10)
}

/// Check that `number` is a valid EGN, returning the compact form.
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
    get_birth_date(&number)?;
    let check = u32::from(number.as_bytes()[9] - b'0');
    if check != calc_check_digit(&number[..9])? {
        return Err(ValidationError::InvalidChecksum(
            "check digit does not match".into(),
        ));
    }
    Ok(number)
}

/// True when `number` is a valid EGN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

// ---------------------------------------------------------------------------
