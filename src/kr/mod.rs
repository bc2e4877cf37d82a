//! South Korean identifiers.

pub mod brn;
