//! Ecuadorian identifiers: the CI identity card and the RUC taxpayer
//! registration built on top of it.

pub mod ci;
pub mod ruc;
