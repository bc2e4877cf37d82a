//! Pakistani identifiers.

pub mod cnic;
