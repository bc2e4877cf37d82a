//! Moroccan identifiers.

pub mod ice;
