//! Costa Rican identifiers.

pub mod cpf;
