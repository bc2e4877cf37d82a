//! Romanian identifiers.

pub mod onrc;
