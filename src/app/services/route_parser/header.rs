//! Header-row location and column resolution
//!
//! Route-information sheets put their header at an arbitrary row, below
//! titles and revision notes. The header is found by scanning for known
//! column labels, then the three required columns are resolved by
//! substring so decorated labels like `道岔组合` still match.

use crate::app::models::{RouteRecord, Sheet};
use crate::constants::{HEADER_KEYWORDS, ROUTE_TYPE_COLUMN, SWITCH_COLUMN, TRACK_COLUMN};
use crate::{Error, Result};

/// Resolved header for one sheet: the header row index plus the column
/// indices of the three required logical columns.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Index of the header row within the sheet
    pub header_row: usize,

    /// Column index of the switch-combination column (道岔)
    pub switches: usize,

    /// Column index of the track-section column (轨道区段)
    pub track_sections: usize,

    /// Column index of the route-type column (进路类型)
    pub route_type: usize,
}

impl ColumnMap {
    /// Locate the header row and resolve the required columns.
    ///
    /// Fails with [`Error::HeaderNotFound`] when no row matches the keyword
    /// set, and with [`Error::MissingColumn`] when a required column cannot
    /// be resolved from the header row. `file` is only used for error
    /// context.
    pub fn resolve(sheet: &Sheet, file: &str) -> Result<Self> {
        let header_row = find_header_row(sheet).ok_or_else(|| Error::header_not_found(file))?;
        let header = &sheet.rows()[header_row];

        let switches = find_column(header, SWITCH_COLUMN)
            .ok_or_else(|| Error::missing_column(file, SWITCH_COLUMN))?;
        let track_sections = find_column(header, TRACK_COLUMN)
            .ok_or_else(|| Error::missing_column(file, TRACK_COLUMN))?;
        let route_type = find_column(header, ROUTE_TYPE_COLUMN)
            .ok_or_else(|| Error::missing_column(file, ROUTE_TYPE_COLUMN))?;

        Ok(Self {
            header_row,
            switches,
            track_sections,
            route_type,
        })
    }

    /// Extract the raw route record of one data row. Cells beyond the row's
    /// width read as empty.
    pub fn extract(&self, row: &[String]) -> RouteRecord {
        RouteRecord::new(
            cell(row, self.switches),
            cell(row, self.track_sections),
            cell(row, self.route_type),
        )
    }

    /// Extract every data row below the header, in sheet order.
    pub fn extract_records(&self, sheet: &Sheet) -> Vec<RouteRecord> {
        sheet
            .rows()
            .iter()
            .skip(self.header_row + 1)
            .map(|row| self.extract(row))
            .collect()
    }
}

/// Find the first row where at least one cell, after trimming, exactly
/// equals one of the header keywords.
pub fn find_header_row(sheet: &Sheet) -> Option<usize> {
    sheet
        .rows()
        .iter()
        .position(|row| row.iter().any(|cell| HEADER_KEYWORDS.contains(&cell.trim())))
}

/// Resolve a logical column by substring containment in the header cells,
/// taking the first match.
fn find_column(header: &[String], label: &str) -> Option<usize> {
    header.iter().position(|cell| cell.contains(label))
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
