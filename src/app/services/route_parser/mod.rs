//! Parser for route-information sheet rows
//!
//! This module turns the untyped rows of a route-information sheet into
//! structured result records. The sheets have no fixed layout, so parsing
//! starts by locating the header row and resolving the required columns,
//! then processes every data row below it.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`header`] - Dynamic header-row location and column resolution
//! - [`track_entry`] - Track-section sub-entry parsing
//! - [`switch_matcher`] - Numeric matching of switches to track sections
//! - [`row_processor`] - Per-row orchestration and result emission
//! - [`stats`] - Parsing statistics and result structures

pub mod header;
pub mod row_processor;
pub mod stats;
pub mod switch_matcher;
pub mod track_entry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::{ColumnMap, find_header_row};
pub use row_processor::{process_record, process_records, split_switch_cell, split_track_cell};
pub use stats::{ParseResult, ParseStats};
pub use switch_matcher::match_switches;
pub use track_entry::parse_track_entry;
