//! # kennung
//!
//! National-identifier validation and formatting: personal numbers, VAT
//! IDs, bank account numbers and the check-digit algorithms behind them.
//!
//! Every identifier module exposes the same surface: `compact` strips
//! separators and country prefixes, `validate` returns the canonical
//! compact form or a typed [`ValidationError`], `is_valid` folds that to
//! a bool, and `format` (where a conventional grouping exists) renders
//! the presentation form. Identifier-specific accessors such as
//! [`bg::egn::get_birth_date`] or [`no::kontonr::to_iban`] work on the
//! compact form. The [`registry`] dispatches on [`IdentifierKind`] when
//! the kind is only known at runtime.
//!
//! All functions are pure: no I/O, no locks, no global mutable state.
//!
//! ## Quick Start
//!
//! ```rust
//! use kennung::{IdentifierKind, bg, no, registry};
//!
//! // Statically known kind: call the module directly.
//! assert_eq!(bg::egn::validate("752316 926 3").unwrap(), "7523169263");
//!
//! // Kind decided at runtime: go through the registry.
//! let validator = registry::get_validator(IdentifierKind::NoKontonr);
//! assert!(validator.is_valid("8601 11 17947"));
//! assert_eq!(
//!     no::kontonr::to_iban("8601 11 17947").unwrap(),
//!     "NO93 8601 11 17947",
//! );
//! ```

pub mod bg;
pub mod checksum;
pub mod cr;
pub mod ec;
pub mod error;
pub mod kr;
pub mod ma;
pub mod no;
pub mod nz;
pub mod pk;
pub mod registry;
pub mod ro;
pub mod text;

// Re-export the error and dispatch types at crate root for convenience
pub use crate::error::{UnknownKindError, ValidationError};
pub use crate::registry::{IdentifierKind, Validator, get_validator, list_kinds, lookup};
