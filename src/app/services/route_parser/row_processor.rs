//! Per-row processing of route records
//!
//! Each data row yields zero or more result records: one per surviving
//! track sub-entry, or a single empty-section fallback when the track cell
//! holds no sub-entries at all. Departure routes (发车) have their switch
//! combinations reversed and carry a fixed remark.

use tracing::debug;

use super::stats::{ParseResult, ParseStats};
use super::switch_matcher::match_switches;
use super::track_entry::parse_track_entry;
use crate::app::models::{ResultRecord, RouteRecord};
use crate::constants::{COMBO_SEPARATOR, LINE_BREAK_MARKER, markers, route_types};

/// Split a raw switch cell into trimmed, non-empty tokens.
///
/// Tokens keep their original textual form; internal structure such as
/// `201/202` is never split further.
pub fn split_switch_cell(raw: &str) -> Vec<String> {
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Split a raw track cell into trimmed, non-empty sub-entries.
///
/// Literal `<br>` markers are normalized to commas first, then the cell is
/// split on ASCII comma, Chinese comma, and newline.
pub fn split_track_cell(raw: &str) -> Vec<String> {
    raw.trim()
        .replace(LINE_BREAK_MARKER, ",")
        .split([',', '，', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Process a sheet's route records in order, collecting the emitted
/// result records and statistics.
pub fn process_records(records: &[RouteRecord]) -> ParseResult {
    let mut stats = ParseStats::new();
    let mut results = Vec::new();

    for record in records {
        results.extend(process_record(record, &mut stats));
    }

    ParseResult {
        records: results,
        stats,
    }
}

/// Process one route record into its result records.
pub fn process_record(record: &RouteRecord, stats: &mut ParseStats) -> Vec<ResultRecord> {
    let switch_tokens = split_switch_cell(&record.switches);
    let track_entries = split_track_cell(&record.track_sections);
    let departure = record.route_type.contains(route_types::DEPARTURE_MARKER);

    stats.rows_processed += 1;

    // A row without track sub-entries still describes a route; emit a
    // single record carrying the full switch combination.
    if track_entries.is_empty() {
        let mut tokens = switch_tokens;
        let remark = apply_departure_order(&mut tokens, departure, stats);
        stats.records_emitted += 1;
        return vec![ResultRecord {
            section_name: String::new(),
            switch_combo: join_combo(&tokens),
            section_length: 0,
            remark,
            mainline_flag: String::new(),
        }];
    }

    let mut results = Vec::new();
    for entry_text in &track_entries {
        let Some(entry) = parse_track_entry(entry_text) else {
            debug!("Discarding unparseable track sub-entry '{}'", entry_text);
            stats.entries_discarded += 1;
            continue;
        };
        if entry.length == 0 || entry.section_name.is_empty() {
            debug!("Discarding incomplete track sub-entry '{}'", entry_text);
            stats.entries_discarded += 1;
            continue;
        }

        let mut matched = match_switches(&entry.section_name, &switch_tokens);
        let remark = apply_departure_order(&mut matched, departure, stats);

        stats.records_emitted += 1;
        results.push(ResultRecord {
            section_name: entry.section_name,
            switch_combo: join_combo(&matched),
            section_length: entry.length,
            remark,
            mainline_flag: String::new(),
        });
    }

    results
}

/// Reverse the token order for departure routes and return the remark to
/// carry. Departure rows always carry the remark, even with no tokens.
fn apply_departure_order(
    tokens: &mut [String],
    departure: bool,
    stats: &mut ParseStats,
) -> String {
    if departure {
        tokens.reverse();
        stats.combos_reversed += 1;
        markers::REVERSED_REMARK.to_string()
    } else {
        String::new()
    }
}

fn join_combo(tokens: &[String]) -> String {
    if tokens.is_empty() {
        markers::EMPTY_COMBO.to_string()
    } else {
        tokens.join(COMBO_SEPARATOR)
    }
}
