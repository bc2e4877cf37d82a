//! Damm check-digit algorithm.
//!
//! Runs the digits through a totally anti-symmetric quasigroup table;
//! the interim value after the last digit is the checksum and a valid
//! number ends on zero. Unlike Luhn it catches all single-digit errors
//! and all adjacent transpositions.

use crate::error::ValidationError;
use crate::text::isdigits;

/// A 10x10 quasigroup operation table.
pub type DammTable = [[u8; 10]; 10];

/// The table from Damm's doctoral thesis, the one in common use.
///
/// Its diagonal is all zeros, which makes the check digit of a number
/// equal to its checksum.
pub const DEFAULT_TABLE: DammTable = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// Interim value after folding `number` through `table`.
pub fn checksum_with(number: &str, table: &DammTable) -> Result<u32, ValidationError> {
    if !isdigits(number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    let mut interim = 0u8;
    for b in number.bytes() {
        interim = table[interim as usize][(b - b'0') as usize];
    }
    Ok(u32::from(interim))
}

/// Interim value after folding `number` through [`DEFAULT_TABLE`].
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    checksum_with(number, &DEFAULT_TABLE)
}

/// Check that `number` (including its trailing check digit) folds to zero.
pub fn validate_with(number: &str, table: &DammTable) -> Result<(), ValidationError> {
    if checksum_with(number, table)? != 0 {
        return Err(ValidationError::InvalidChecksum(
            "Damm checksum is non-zero".into(),
        ));
    }
    Ok(())
}

/// [`validate_with`] against [`DEFAULT_TABLE`].
pub fn validate(number: &str) -> Result<(), ValidationError> {
    validate_with(number, &DEFAULT_TABLE)
}

pub fn is_valid_with(number: &str, table: &DammTable) -> bool {
    validate_with(number, table).is_ok()
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Compute the digit that must be appended to `number` to make it pass.
///
/// Assumes a zero-diagonal table (true of [`DEFAULT_TABLE`]), where the
/// checksum itself closes the number.
///
/// ```
/// use kennung::checksum::damm;
///
/// assert_eq!(damm::calc_check_digit("572").unwrap(), 4);
/// assert!(damm::is_valid("5724"));
/// ```
pub fn calc_check_digit(number: &str) -> Result<u32, ValidationError> {
    checksum(number)
}
