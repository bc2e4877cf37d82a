//! Generic check-digit algorithms shared by the country modules.
//!
//! Every submodule exposes the same small surface: a `checksum` over the
//! digit string, a `validate` that raises [`ValidationError`] on failure,
//! an `is_valid` convenience wrapper and a check-digit calculator for
//! generating numbers. Country modules layer their structural rules on
//! top of these.
//!
//! [`ValidationError`]: crate::ValidationError

pub mod damm;
pub mod iso7064;
pub mod luhn;
pub mod weighted;
