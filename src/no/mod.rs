//! Norwegian identifiers.

pub mod kontonr;
