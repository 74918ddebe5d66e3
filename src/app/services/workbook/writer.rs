//! Analysis workbook writing
//!
//! Writes the result records of one input file to a fresh xlsx workbook:
//! a fixed header row, then one row per record, no index column.

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::models::ResultRecord;
use crate::constants::{OUTPUT_COLUMNS, output_file_name};
use crate::{Error, Result};

/// Build the output path for an input workbook: same stem with the
/// analysis suffix, placed in `output_dir`. Outputs are always xlsx.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(output_file_name(&stem))
}

/// Write result records to an analysis workbook at `path`.
pub fn write_results(path: &Path, records: &[ResultRecord]) -> Result<()> {
    let file = path.display().to_string();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in OUTPUT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(|e| Error::workbook_write(&file, e))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string(row, 0, record.section_name.as_str())
            .and_then(|ws| ws.write_string(row, 1, record.switch_combo.as_str()))
            .and_then(|ws| ws.write_number(row, 2, record.section_length as f64))
            .and_then(|ws| ws.write_string(row, 3, record.remark.as_str()))
            .and_then(|ws| ws.write_string(row, 4, record.mainline_flag.as_str()))
            .map_err(|e| Error::workbook_write(&file, e))?;
    }

    workbook.save(path).map_err(|e| Error::workbook_write(&file, e))?;

    debug!("Wrote {} result records to {}", records.len(), file);
    Ok(())
}
