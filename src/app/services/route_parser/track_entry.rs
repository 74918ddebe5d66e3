//! Track-section sub-entry parsing
//!
//! A track cell holds one or more sub-entries, each a backslash/comma
//! delimited record whose first component is the section length and whose
//! last component is the section code, e.g. `150,区段A,备注,201DG`.

use crate::app::models::TrackEntry;

/// Parse one free-text track sub-entry into a [`TrackEntry`].
///
/// Returns `None` when the sub-entry has fewer than 4 delimited parts or
/// its first part is not an integer. The section name is the last part,
/// trimmed; whether an empty name or zero length disqualifies the entry is
/// decided by the caller.
pub fn parse_track_entry(entry: &str) -> Option<TrackEntry> {
    let parts: Vec<&str> = entry.trim().split(['\\', ',']).collect();
    if parts.len() < 4 {
        return None;
    }

    let length = parts[0].trim().parse::<i64>().ok()?;
    let section_name = parts.last()?.trim().to_string();

    Some(TrackEntry {
        length,
        section_name,
    })
}
