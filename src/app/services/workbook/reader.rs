//! Workbook loading
//!
//! Loads the first sheet of an input workbook as an untyped grid of cell
//! text. No header is assumed at load time; the header is located later
//! by the parser. Empty cells read as empty strings so that the parsing
//! pipeline's empty-cell handling (fallback records, dropped tokens) sees
//! them as such.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use crate::app::models::Sheet;
use crate::{Error, Result};

/// Load the first sheet of a workbook into a [`Sheet`].
///
/// Handles both xlsx and xls via format auto-detection.
pub fn load_first_sheet(path: &Path) -> Result<Sheet> {
    let file = path.display().to_string();

    let mut workbook = open_workbook_auto(path).map_err(|e| Error::workbook_read(&file, e))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::workbook_read(&file, calamine::Error::Msg("workbook has no sheets")))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::workbook_read(&file, e))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    debug!(
        "Loaded sheet '{}' from {}: {} rows",
        sheet_name,
        file,
        rows.len()
    );

    Ok(Sheet::from_rows(rows))
}

/// Render one cell to text. Integral floats print without a fraction, so
/// a numeric cell holding 150 reads as "150".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
