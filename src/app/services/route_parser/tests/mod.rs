//! Test utilities for route-parser testing
//!
//! Shared helpers for building sheets, records, and token lists used
//! across the parser test modules.

use crate::app::models::{RouteRecord, Sheet};


/// Build a sheet from string-literal rows
pub fn sheet(rows: &[&[&str]]) -> Sheet {
    Sheet::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

/// Build a route record from raw cell text
pub fn record(switches: &str, track_sections: &str, route_type: &str) -> RouteRecord {
    RouteRecord::new(switches, track_sections, route_type)
}

/// Build an owned token list from string literals
pub fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
