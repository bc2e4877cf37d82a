//! Bulgarian VAT number (ДДС номер).
//!
//! Nine digits for legal entities, ten for everyone else. The ten-digit
//! form is a civil number in disguise: it is accepted when it passes as
//! an [EGN](super::egn), as a [PNF](super::pnf) or via its own weighted
//! checksum for numbers the civil registers never issued.

use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::text::{clean, isdigits};

use super::{egn, pnf};

const LEGAL_WEIGHTS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
const LEGAL_WEIGHTS_RETRY: [u32; 8] = [3, 4, 5, 6, 7, 8, 9, 10];
const OTHER_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Strip separators and any leading `BG` country prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, " -/,.").to_ascii_uppercase();
    let mut rest = number.as_str();
    while let Some(stripped) = rest.strip_prefix("BG") {
        rest = stripped.trim_start();
    }
    rest.to_string()
}

/// Check digit for the first eight digits of a nine-digit legal-entity
/// number.
pub fn calc_check_digit_legal(number: &str) -> Result<u32, ValidationError> {
    let mut check = weighted::checksum(number, &LEGAL_WEIGHTS, 11)?;
    if check == 10 {
        check = weighted::checksum(number, &LEGAL_WEIGHTS_RETRY, 11)?;
    }
    Ok(check % 10)
}

/// Check digit for the first nine digits of a ten-digit number that is
/// neither an EGN nor a PNF.
///
/// Returns 10 for bases that have no valid check digit.
pub fn calc_check_digit_other(number: &str) -> Result<u32, ValidationError> {
    Ok((11 - weighted::checksum(number, &OTHER_WEIGHTS, 11)?) % 11)
}

/// Check that `number` is a valid Bulgarian VAT number, returning the
/// compact form without the `BG` prefix.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !isdigits(&number) {
        return Err(ValidationError::InvalidFormat(
            "number must contain only digits".into(),
        ));
    }
    match number.len() {
        9 => {
            let check = u32::from(number.as_bytes()[8] - b'0');
            if check != calc_check_digit_legal(&number[..8])? {
                return Err(ValidationError::InvalidChecksum(
                    "check digit does not match".into(),
                ));
            }
        }
        10 => {
            let check = u32::from(number.as_bytes()[9] - b'0');
            if !egn::is_valid(&number)
                && !pnf::is_valid(&number)
                && check != calc_check_digit_other(&number[..9])?
            {
                return Err(ValidationError::InvalidChecksum(
                    "number is neither an EGN, a PNF nor a valid VAT checksum".into(),
                ));
            }
        }
        n => {
            return Err(ValidationError::InvalidLength(format!(
                "expected 9 or 10 digits, got {n}"
            )));
        }
    }
    Ok(number)
}

/// True when `number` is a valid Bulgarian VAT number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

// ---------------------------------------------------------------------------
