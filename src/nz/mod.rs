//! New Zealand identifiers.

pub mod ird;
