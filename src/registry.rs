//! Registry mapping identifier kinds to their validator modules.
//!
//! The registry is the dispatch surface for callers that receive the
//! kind at runtime (configuration, user input, wire data). Callers that
//! know the kind statically use the country modules directly; both
//! paths run the same functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownKindError, ValidationError};
use crate::{bg, cr, ec, kr, ma, no, nz, pk, ro};

/// Tag naming one supported identifier kind.
///
/// The wire name is the lowercase `snake_case` form (`"bg_egn"`,
/// `"no_kontonr"`, …), used by serde and [`FromStr`] alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    BgEgn,
    BgPnf,
    BgVat,
    CrCpf,
    EcCi,
    EcRuc,
    KrBrn,
    MaIce,
    NoKontonr,
    NzIrd,
    PkCnic,
    RoOnrc,
}

/// All supported kinds in registry order.
pub const KINDS: [IdentifierKind; 12] = [
    IdentifierKind::BgEgn,
    IdentifierKind::BgPnf,
    IdentifierKind::BgVat,
    IdentifierKind::CrCpf,
    IdentifierKind::EcCi,
    IdentifierKind::EcRuc,
    IdentifierKind::KrBrn,
    IdentifierKind::MaIce,
    IdentifierKind::NoKontonr,
    IdentifierKind::NzIrd,
    IdentifierKind::PkCnic,
    IdentifierKind::RoOnrc,
];

impl IdentifierKind {
    /// The stable wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BgEgn => "bg_egn",
            Self::BgPnf => "bg_pnf",
            Self::BgVat => "bg_vat",
            Self::CrCpf => "cr_cpf",
            Self::EcCi => "ec_ci",
            Self::EcRuc => "ec_ruc",
            Self::KrBrn => "kr_brn",
            Self::MaIce => "ma_ice",
            Self::NoKontonr => "no_kontonr",
            Self::NzIrd => "nz_ird",
            Self::PkCnic => "pk_cnic",
            Self::RoOnrc => "ro_onrc",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = UnknownKindError;

    /// Parse a kind name, tolerating case and `.`/`-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownKindError { name: s.to_string() })
    }
}

/// Handle over one validator module's uniform surface.
pub struct Validator {
    kind: IdentifierKind,
    name: &'static str,
    compact_fn: fn(&str) -> String,
    validate_fn: fn(&str) -> Result<String, ValidationError>,
    format_fn: Option<fn(&str) -> String>,
}

impl Validator {
    /// The kind this validator implements.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Human-readable description of the identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Normalize `number` to its compact form. Never fails.
    pub fn compact(&self, number: &str) -> String {
        (self.compact_fn)(number)
    }

    /// Normalize and verify `number`, returning the compact form.
    pub fn validate(&self, number: &str) -> Result<String, ValidationError> {
        (self.validate_fn)(number)
    }

    /// True when `number` validates.
    pub fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }

    /// Present `number` in its conventional grouping, or `None` when the
    /// identifier defines no presentation form.
    pub fn format(&self, number: &str) -> Option<String> {
        self.format_fn.map(|f| f(number))
    }

    /// True when the identifier defines a presentation form.
    pub fn has_format(&self) -> bool {
        self.format_fn.is_some()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("has_format", &self.has_format())
            .finish()
    }
}

// Indexed by the discriminant of IdentifierKind.
static REGISTRY: [Validator; 12] = [
    Validator {
        kind: IdentifierKind::BgEgn,
        name: "Bulgarian EGN (uniform civil number)",
        compact_fn: bg::egn::compact,
        validate_fn: bg::egn::validate,
        format_fn: None,
    },
    Validator {
        kind: IdentifierKind::BgPnf,
        name: "Bulgarian PNF (personal number of a foreigner)",
        compact_fn: bg::pnf::compact,
        validate_fn: bg::pnf::validate,
        format_fn: None,
    },
    Validator {
        kind: IdentifierKind::BgVat,
        name: "Bulgarian VAT number",
        compact_fn: bg::vat::compact,
        validate_fn: bg::vat::validate,
        format_fn: None,
    },
    Validator {
        kind: IdentifierKind::CrCpf,
        name: "Costa Rican CPF (physical person ID)",
        compact_fn: cr::cpf::compact,
        validate_fn: cr::cpf::validate,
        format_fn: Some(cr::cpf::format),
    },
    Validator {
        kind: IdentifierKind::EcCi,
        name: "Ecuadorian CI (personal identity card)",
        compact_fn: ec::ci::compact,
        validate_fn: ec::ci::validate,
        format_fn: None,
    },
    Validator {
        kind: IdentifierKind::EcRuc,
        name: "Ecuadorian RUC (taxpayer registration)",
        compact_fn: ec::ruc::compact,
        validate_fn: ec::ruc::validate,
        format_fn: None,
    },
    Validator {
        kind: IdentifierKind::KrBrn,
        name: "South Korean BRN (business registration number)",
        compact_fn: kr::brn::compact,
        validate_fn: kr::brn::validate,
        format_fn: Some(kr::brn::format),
    },
    Validator {
        kind: IdentifierKind::MaIce,
        name: "Moroccan ICE (common company identifier)",
        compact_fn: ma::ice::compact,
        validate_fn: ma::ice::validate,
        format_fn: Some(ma::ice::format),
    },
    Validator {
        kind: IdentifierKind::NoKontonr,
        name: "Norwegian bank account number",
        compact_fn: no::kontonr::compact,
        validate_fn: no::kontonr::validate,
        format_fn: Some(no::kontonr::format),
    },
    Validator {
        kind: IdentifierKind::NzIrd,
        name: "New Zealand IRD number",
        compact_fn: nz::ird::compact,
        validate_fn: nz::ird::validate,
        format_fn: Some(nz::ird::format),
    },
    Validator {
        kind: IdentifierKind::PkCnic,
        name: "Pakistani CNIC (national identity card)",
        compact_fn: pk::cnic::compact,
        validate_fn: pk::cnic::validate,
        format_fn: Some(pk::cnic::format),
    },
    Validator {
        kind: IdentifierKind::RoOnrc,
        name: "Romanian ONRC (trade register number)",
        compact_fn: ro::onrc::compact,
        validate_fn: ro::onrc::validate,
        format_fn: None,
    },
];

/// Validator for a statically known kind. Constant-time.
pub fn get_validator(kind: IdentifierKind) -> &'static Validator {
    &REGISTRY[kind as usize]
}

/// Validator for a kind named at runtime.
pub fn lookup(name: &str) -> Result<&'static Validator, UnknownKindError> {
    Ok(get_validator(name.parse()?))
}

/// All supported kinds in registry order.
pub fn list_kinds() -> &'static [IdentifierKind] {
    &KINDS
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_indexed_by_discriminant() {
        for (index, validator) in REGISTRY.iter().enumerate() {
            assert_eq!(validator.kind() as usize, index);
            assert_eq!(KINDS[index], validator.kind());
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in KINDS {
            assert_eq!(kind.as_str().parse::<IdentifierKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn parse_tolerates_case_and_separators() {
        assert_eq!("BG_EGN".parse::<IdentifierKind>().unwrap(), IdentifierKind::BgEgn);
        assert_eq!("bg.egn".parse::<IdentifierKind>().unwrap(), IdentifierKind::BgEgn);
        assert_eq!("no-kontonr".parse::<IdentifierKind>().unwrap(), IdentifierKind::NoKontonr);
        assert_eq!(" ro_onrc ".parse::<IdentifierKind>().unwrap(), IdentifierKind::RoOnrc);
    }

    #[test]
    fn unknown_kind_is_a_distinct_error() {
        let err = "xx_nope".parse::<IdentifierKind>().unwrap_err();
        assert_eq!(err.name, "xx_nope");
        assert!(lookup("xx_nope").is_err());
    }

    #[test]
    fn dispatch_runs_the_module_functions() {
        let egn = get_validator(IdentifierKind::BgEgn);
        assert_eq!(egn.validate("752316 926 3").unwrap(), "7523169263");
        assert!(!egn.has_format());
        assert_eq!(egn.format("7523169263"), None);

        let brn = lookup("kr_brn").unwrap();
        assert!(brn.is_valid("1168200276"));
        assert_eq!(brn.format("1168200276"), Some("116-82-00276".into()));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&IdentifierKind::NoKontonr).unwrap();
        assert_eq!(json, "\"no_kontonr\"");
        let kind: IdentifierKind = serde_json::from_str("\"ec_ruc\"").unwrap();
        assert_eq!(kind, IdentifierKind::EcRuc);
    }
}
