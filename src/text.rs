//! Shared text helpers for number normalization.
//!
//! Every identifier module funnels its input through [`clean`] before
//! looking at a single character, so surrounding whitespace and the
//! country-specific separator set never reach the validation logic.

/// Drop every character contained in `strip`, then trim surrounding
/// whitespace. Trimming last keeps the result stable under a second
/// pass even when stripping uncovers whitespace at the edges.
///
/// Characters not in `strip` pass through unchanged, including invalid
/// ones; rejecting those is the caller's job.
pub fn clean(value: &str, strip: &str) -> String {
    let stripped: String = value.chars().filter(|c| !strip.contains(*c)).collect();
    stripped.trim().to_string()
}

/// True when `value` is non-empty and every character is an ASCII digit.
pub fn isdigits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
