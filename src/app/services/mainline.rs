//! Main-line section annotation
//!
//! Second pass over the complete result set. A section belongs to a main
//! line when some route record typed exactly 正线接车 or 反向正线接车
//! lists the section among its track names AND lists every switch of the
//! result's combination among its own switch tokens.
//!
//! Track names here are re-derived from the raw cells: split on ASCII
//! comma, Chinese comma, and newline, then the last backslash-delimited
//! component of each, trimmed. Unlike the row processor, `<br>` markers
//! are not normalized in this pass.

use tracing::debug;

use super::route_parser::split_switch_cell;
use crate::app::models::{ResultRecord, RouteRecord};
use crate::constants::{markers, route_types};

/// Annotate main-line sections in place. Returns the number of records
/// flagged.
pub fn annotate_mainline(results: &mut [ResultRecord], records: &[RouteRecord]) -> usize {
    // Derive each main-line row's track-name and switch-token lists once;
    // the containment test per result record is unchanged.
    let mainline_rows: Vec<(Vec<String>, Vec<String>)> = records
        .iter()
        .filter(|record| route_types::MAINLINE_LABELS.contains(&record.route_type.trim()))
        .map(|record| {
            (
                mainline_track_names(&record.track_sections),
                split_switch_cell(&record.switches),
            )
        })
        .collect();

    debug!(
        "Cross-referencing {} result records against {} main-line rows",
        results.len(),
        mainline_rows.len()
    );

    let mut flagged = 0;
    for result in results.iter_mut() {
        if !is_mainline_section(result, &mainline_rows) {
            continue;
        }
        result.mainline_flag = markers::MAINLINE_FLAG.to_string();
        flagged += 1;
    }
    flagged
}

/// Test one result record against the main-line rows.
fn is_mainline_section(result: &ResultRecord, mainline_rows: &[(Vec<String>, Vec<String>)]) -> bool {
    if result.switch_combo.is_empty() || result.switch_combo == markers::EMPTY_COMBO {
        return false;
    }

    let combo_tokens: Vec<&str> = result
        .switch_combo
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    mainline_rows.iter().any(|(track_names, switch_tokens)| {
        track_names.iter().any(|name| *name == result.section_name)
            && combo_tokens
                .iter()
                .all(|token| switch_tokens.iter().any(|s| s == token))
    })
}

/// Derive the track-name list of a raw track cell: one name per non-blank
/// comma/newline-delimited entry, the last backslash component trimmed.
fn mainline_track_names(raw: &str) -> Vec<String> {
    raw.split([',', '，', '\n'])
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry
                .rsplit('\\')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .collect()
}
