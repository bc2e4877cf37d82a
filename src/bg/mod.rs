//! Bulgarian identifiers: the EGN civil number, the PNF foreigner number
//! and the VAT number that builds on both.

pub mod egn;
pub mod pnf;
pub mod vat;
