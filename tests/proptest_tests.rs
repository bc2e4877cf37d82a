//! Property-based tests and edge case tests for the kennung crate.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use kennung::checksum::iso7064::mod_97_10;
use kennung::checksum::{damm, luhn};
use kennung::{IdentifierKind, bg, get_validator, list_kinds, ma, no, pk, ro};
use proptest::prelude::*;

/// Known-good compact numbers and the separators their kind tolerates.
///
/// The trade register number is absent on purpose: its separators carry
/// field structure and get their own property below.
const DECORATION_TABLE: &[(IdentifierKind, &str, &str)] = &[
    (IdentifierKind::BgEgn, "7523169263", " -."),
    (IdentifierKind::BgPnf, "7111042925", " -."),
    (IdentifierKind::BgVat, "175074752", " -/,."),
    (IdentifierKind::CrCpf, "0304550175", " "),
    (IdentifierKind::EcCi, "1714307103", " -"),
    (IdentifierKind::EcRuc, "1792060346001", " -"),
    (IdentifierKind::KrBrn, "1168200276", " -"),
    (IdentifierKind::MaIce, "001561191000066", " -"),
    (IdentifierKind::NoKontonr, "86011117947", " .-"),
    (IdentifierKind::NzIrd, "49091850", " -"),
    (IdentifierKind::PkCnic, "3420108912318", " -"),
];

/// Sprinkle separator runs between the digits of `canonical`.
fn decorate(canonical: &str, seps: &str, runs: &[(usize, prop::sample::Index)]) -> String {
    let sep_chars: Vec<char> = seps.chars().collect();
    let mut out = String::new();
    let mut cursor = runs.iter().cycle();
    for ch in canonical.chars() {
        let (count, pick) = cursor.next().unwrap();
        for _ in 0..*count {
            out.push(sep_chars[pick.index(sep_chars.len())]);
        }
        out.push(ch);
    }
    out
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate separator runs: how many to insert before a digit, and which.
fn arb_runs() -> impl Strategy<Value = Vec<(usize, prop::sample::Index)>> {
    prop::collection::vec((0usize..=2, any::<prop::sample::Index>()), 1..=20)
}

/// Generate one separator character accepted between trade register fields.
fn arb_onrc_sep() -> impl Strategy<Value = char> {
    prop_oneof![Just(' '), Just('/'), Just('\\'), Just('-')]
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Whatever the input, a success returns exactly the compacted form.
    #[test]
    fn validate_output_is_the_compact_form(input in any::<String>()) {
        for &kind in list_kinds() {
            let validator = get_validator(kind);
            let compact = validator.compact(&input);
            match validator.validate(&input) {
                Ok(canonical) => {
                    prop_assert!(validator.is_valid(&input));
                    prop_assert!(!canonical.is_empty());
                    prop_assert!(canonical.is_ascii());
                    prop_assert_eq!(canonical, compact);
                }
                Err(_) => prop_assert!(!validator.is_valid(&input)),
            }
            // Formatting must never panic, whatever the input.
            let _ = validator.format(&input);
        }
    }

    /// Compacting is a fixpoint: a second pass never changes the output.
    #[test]
    fn compact_is_idempotent(input in any::<String>()) {
        for &kind in list_kinds() {
            let validator = get_validator(kind);
            let once = validator.compact(&input);
            let twice = validator.compact(&once);
            prop_assert_eq!(twice, once);
        }
    }

    /// Separators a kind tolerates never change acceptance or the result.
    #[test]
    fn separators_never_change_the_compact_form(
        entry in prop::sample::select(DECORATION_TABLE),
        runs in arb_runs(),
    ) {
        let (kind, canonical, seps) = entry;
        let decorated = decorate(canonical, seps, &runs);
        let validator = get_validator(kind);
        prop_assert_eq!(validator.validate(&decorated).unwrap(), canonical);
    }

    /// Field separators in any style normalize to the canonical slash form.
    #[test]
    fn onrc_separator_styles_normalize(
        lower in any::<bool>(),
        after_letter in prop::collection::vec(arb_onrc_sep(), 0..=2),
        first in prop::collection::vec(arb_onrc_sep(), 1..=3),
        second in prop::collection::vec(arb_onrc_sep(), 1..=3),
    ) {
        let letter = if lower { "j" } else { "J" };
        let raw = format!(
            "{letter}{}52{}750{}2012",
            after_letter.iter().collect::<String>(),
            first.iter().collect::<String>(),
            second.iter().collect::<String>(),
        );
        prop_assert_eq!(ro::onrc::validate(&raw).unwrap(), "J52/750/2012");
    }

    /// Any supported birth date survives the round trip through an EGN.
    #[test]
    fn egn_embeds_any_supported_date(
        year in 1800i32..=2099,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 0u32..=999,
    ) {
        let coded_month = match year {
            1800..=1899 => month + 20,
            1900..=1999 => month,
            _ => month + 40,
        };
        let stem = format!("{:02}{coded_month:02}{day:02}{serial:03}", year % 100);
        let check = bg::egn::calc_check_digit(&stem).unwrap();
        let number = format!("{stem}{check}");
        prop_assert!(bg::egn::is_valid(&number));
        prop_assert_eq!(
            bg::egn::get_birth_date(&number).unwrap(),
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        );
    }

    /// Every single-digit error is caught (all PNF weights are coprime to 10).
    #[test]
    fn pnf_catches_every_single_digit_error(pos in 0usize..10, delta in 1u8..10) {
        let mut mutated = b"7111042925".to_vec();
        mutated[pos] = b'0' + (mutated[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(mutated).unwrap();
        prop_assert!(!bg::pnf::is_valid(&mutated));
    }

    /// Every single-digit error shifts the ICE residue (97 is prime).
    #[test]
    fn ice_catches_every_single_digit_error(pos in 0usize..15, delta in 1u8..10) {
        let mut mutated = b"001561191000066".to_vec();
        mutated[pos] = b'0' + (mutated[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(mutated).unwrap();
        prop_assert!(!ma::ice::is_valid(&mutated));
    }

    /// The computed Luhn digit always closes the number.
    #[test]
    fn luhn_check_digit_closes(number in "[0-9]{1,20}") {
        let check = luhn::calc_check_digit(&number).unwrap();
        let closed = format!("{number}{check}");
        prop_assert!(luhn::is_valid(&closed));
    }

    /// The computed Damm digit always closes the number.
    #[test]
    fn damm_check_digit_closes(number in "[0-9]{1,20}") {
        let check = damm::calc_check_digit(&number).unwrap();
        let closed = format!("{number}{check}");
        prop_assert!(damm::is_valid(&closed));
    }

    /// The computed MOD 97-10 pair always leaves residue one.
    #[test]
    fn mod97_check_digits_close(number in "[0-9]{1,40}") {
        let check = mod_97_10::calc_check_digits(&number).unwrap();
        let closed = format!("{number}{check}");
        prop_assert!(mod_97_10::is_valid(&closed));
    }
}

// ── Edge Case Tests ─────────────────────────────────────────────────────────

// --- Hostile inputs ---

#[test]
fn garbage_inputs_error_cleanly() {
    let inputs = [
        "",
        "   ",
        "١٢٣٤٥٦٧٨٩٠",           // Arabic-Indic digits
        "１２３４５６７８９０", // fullwidth digits
        "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀",
        "12\u{0}4567890",
    ];
    for input in inputs {
        for &kind in list_kinds() {
            let validator = get_validator(kind);
            assert!(
                validator.validate(input).is_err(),
                "{kind} accepted {input:?}"
            );
            let _ = validator.format(input);
        }
        // Accessors assume compact input but must never panic on raw text.
        let _ = bg::egn::get_birth_date(input);
        let _ = pk::cnic::get_gender(input);
        let _ = pk::cnic::get_province(input);
        let _ = no::kontonr::to_iban(input);
    }
}

// --- Oversized inputs ---

#[test]
fn oversized_inputs_are_rejected() {
    let digits = "7".repeat(10_000);
    let separators = " -".repeat(5_000);
    for &kind in list_kinds() {
        let validator = get_validator(kind);
        assert!(validator.validate(&digits).is_err(), "{kind}");
        assert!(validator.validate(&separators).is_err(), "{kind}");
    }
}

// --- Formatting round trips ---

#[test]
fn format_output_revalidates() {
    for &(kind, canonical, _) in DECORATION_TABLE {
        let validator = get_validator(kind);
        if let Some(pretty) = validator.format(canonical) {
            assert_eq!(validator.validate(&pretty).unwrap(), canonical, "{kind}");
            assert_eq!(validator.format(&pretty).unwrap(), pretty, "{kind}");
        }
    }
}
