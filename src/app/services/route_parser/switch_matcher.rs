//! Numeric matching of switches to track sections
//!
//! A DG track-section code names one switch number or an inclusive range
//! of them (`201DG`, `201-203DG`). A raw switch token is relevant to the
//! section when any number in that range appears in the token as a whole
//! number. Sections whose name is not a DG code never receive switch
//! attribution.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Anchored DG-code pattern: digits, an optional `-digits` range, then the
/// literal `DG` suffix.
fn track_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)(?:-([0-9]+))?DG").expect("valid track code pattern")
    })
}

/// Extract the inclusive switch-number range of a DG section code.
///
/// Returns `None` for names that do not start with a DG code, including
/// numbers too large to represent; such sections match no switches.
pub fn section_number_range(section_name: &str) -> Option<RangeInclusive<u64>> {
    let caps = track_code_pattern().captures(section_name)?;
    let start: u64 = caps[1].parse().ok()?;
    let end: u64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => start,
    };
    Some(start..=end)
}

/// Select the switch tokens numerically relevant to a track section.
///
/// Tokens are kept in their original textual form and first-occurrence
/// order; a token qualifies when any number in the section's range appears
/// in it as a whole number.
pub fn match_switches(section_name: &str, switch_tokens: &[String]) -> Vec<String> {
    let Some(range) = section_number_range(section_name) else {
        return Vec::new();
    };

    switch_tokens
        .iter()
        .filter(|token| token_mentions_number_in(token, &range))
        .cloned()
        .collect()
}

/// Whole-number containment test with explicit boundary checks.
///
/// A match is a maximal ASCII digit run (non-digit or string edge on both
/// sides) whose canonical decimal form falls in the range, so "201" is
/// found in "201/202" but not in "2010" or "1201", and "0201" never stands
/// for 201.
fn token_mentions_number_in(token: &str, range: &RangeInclusive<u64>) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let run = &token[start..i];
        let canonical = run.len() == 1 || !run.starts_with('0');
        if canonical && run.parse::<u64>().is_ok_and(|n| range.contains(&n)) {
            return true;
        }
    }
    false
}
