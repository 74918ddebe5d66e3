//! Data models for route-information table processing
//!
//! This module contains the core data structures flowing through the
//! analysis pipeline: the untyped spreadsheet grid, the per-row raw route
//! record, the parsed track entry, and the output result record.

use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Spreadsheet Grid
// =============================================================================

/// An untyped spreadsheet grid, rows of cell text.
///
/// Route-information tables carry no fixed schema: title rows, merged cells,
/// and varying column orders all appear in the wild. The grid is loaded
/// as-is and interpreted by the header locator.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Create a sheet from raw rows of cell text
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows of the grid, in sheet order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get a single row by index
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Route Records
// =============================================================================

/// Raw cell text of one data row below the header.
///
/// Values are kept exactly as read; trimming and splitting happen in the
/// parsing pipeline so the main-line cross-reference can re-derive its own
/// view of the same cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Raw switch-combination cell text (道岔)
    pub switches: String,

    /// Raw track-section cell text (轨道区段)
    pub track_sections: String,

    /// Raw route-type cell text (进路类型)
    pub route_type: String,
}

impl RouteRecord {
    /// Create a route record from raw cell values
    pub fn new(
        switches: impl Into<String>,
        track_sections: impl Into<String>,
        route_type: impl Into<String>,
    ) -> Self {
        Self {
            switches: switches.into(),
            track_sections: track_sections.into(),
            route_type: route_type.into(),
        }
    }
}

// =============================================================================
// Parsed Track Entries
// =============================================================================

/// One parsed track-section sub-entry: its length and section name.
///
/// Produced from cell text such as `150,区段A,备注,201DG`, where the first
/// component is the section length and the last is the section code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    /// Section length from the first component of the sub-entry
    pub length: i64,

    /// Section name from the last component, trimmed
    pub section_name: String,
}

// =============================================================================
// Result Records
// =============================================================================

/// One output row of the analysis table.
///
/// Emitted per surviving track sub-entry, or once per route row as an
/// empty-section fallback when the track cell holds no sub-entries. The
/// main-line flag is filled in by a second pass over the complete result
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Track-section name, empty for the fallback record
    pub section_name: String,

    /// Switch tokens joined by comma, or the 无 marker when none apply
    pub switch_combo: String,

    /// Section length, 0 for the fallback record
    pub section_length: i64,

    /// 道岔组合逆序 when the combination was reversed, else empty
    pub remark: String,

    /// 正线区段 when the section belongs to a main line, else empty
    pub mainline_flag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_row_access() {
        let sheet = Sheet::from_rows(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row(0), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(sheet.row(2), None);
        assert!(!sheet.is_empty());
    }

    #[test]
    fn test_route_record_from_raw_cells() {
        let record = RouteRecord::new("201,202", "150,A,x,201DG", "正线接车");
        assert_eq!(record.switches, "201,202");
        assert_eq!(record.route_type, "正线接车");
    }
}
