//! ONRC (Ordine din Registrul Comerţului), the Romanian Trade Register
//! number.
//!
//! Canonical form `L##/serial/year`: a register letter (`J` company,
//! `F` sole trader, `C` cooperative), a two-digit county, a serial and
//! the registration year. Real-world inputs arrive with every separator
//! imaginable and sometimes a full registration date in the last field;
//! normalization absorbs both.

use chrono::{Datelike, Local};

use crate::error::ValidationError;
use crate::text::isdigits;

/// True when `field` looks like a `dd.mm.yyyy` date; returns the year.
fn full_date_year(field: &str) -> Option<&str> {
    let mut parts = field.split('.');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_none()
        && (1..=2).contains(&day.len())
        && (1..=2).contains(&month.len())
        && year.len() == 4
        && isdigits(day)
        && isdigits(month)
        && isdigits(year)
    {
        Some(year)
    } else {
        None
    }
}

/// Normalize to `L##/serial/year`.
///
/// Runs of spaces, slashes, backslashes and dashes collapse to a single
/// `/`; a separator between the letter and the county is dropped; a
/// single-digit county gains a leading zero; a full date in the last
/// field collapses to its year.
pub fn compact(number: &str) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(number.len());
    for c in number.trim().chars() {
        if matches!(c, ' ' | '/' | '\\' | '-') {
            if chars.last() != Some(&'/') {
                chars.push('/');
            }
        } else {
            chars.push(c.to_ascii_uppercase());
        }
    }
    if chars.get(1) == Some(&'/') {
        chars.remove(1);
    }
    if chars.get(2) == Some(&'/') {
        chars.insert(1, '0');
    }
    let number: String = chars.into_iter().collect();
    let fields: Vec<&str> = number.split('/').collect();
    if let [letter_county, serial, date] = fields.as_slice() {
        if let Some(year) = full_date_year(date) {
            return format!("{letter_county}/{serial}/{year}");
        }
    }
    number
}

/// Check that `number` is a valid ONRC, returning the canonical form.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    let fields: Vec<&str> = number.split('/').collect();
    let [letter_county, serial, year] = fields.as_slice() else {
        return Err(ValidationError::InvalidFormat(
            "expected letter/serial/year fields".into(),
        ));
    };
    let bytes = letter_county.as_bytes();
    if bytes.len() != 3 || !bytes[0].is_ascii_alphabetic() || !isdigits(&letter_county[1..]) {
        return Err(ValidationError::InvalidFormat(
            "expected a register letter and a two-digit county".into(),
        ));
    }
    if !isdigits(serial) {
        return Err(ValidationError::InvalidFormat(
            "serial must contain only digits".into(),
        ));
    }
    if year.len() != 4 || !isdigits(year) {
        return Err(ValidationError::InvalidFormat(
            "year must be four digits".into(),
        ));
    }
    if serial.len() > 5 {
        return Err(ValidationError::InvalidLength(format!(
            "serial must be at most 5 digits, got {}",
            serial.len()
        )));
    }
    if !matches!(bytes[0], b'J' | b'F' | b'C') {
        return Err(ValidationError::InvalidComponent(
            "register letter must be J, F or C".into(),
        ));
    }
    let county = u32::from(bytes[1] - b'0') * 10 + u32::from(bytes[2] - b'0');
    if !((1..=40).contains(&county) || county == 51 || county == 52) {
        return Err(ValidationError::InvalidComponent(format!(
            "unknown county {county:02}"
        )));
    }
    let this_year = Local::now().year();
    let year_value = year
        .bytes()
        .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));
    if year_value < 1990 || year_value > this_year {
        return Err(ValidationError::InvalidComponent(format!(
            "registration year {year_value} is outside 1990..{this_year}"
        )));
    }
    Ok(number)
}

/// True when `number` is a valid ONRC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

// ---------------------------------------------------------------------------
