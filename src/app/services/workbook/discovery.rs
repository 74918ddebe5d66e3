//! Discovery of route-information workbooks
//!
//! Scans one directory for workbook files whose name carries the
//! route-information marker, in the extensions the tables ship with.
//! Previously written analysis workbooks also carry the marker in their
//! stem, so they are filtered out to keep reruns idempotent.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{INPUT_EXTENSIONS, INPUT_FILE_MARKER, OUTPUT_SUFFIX};
use crate::Result;

/// Discover route-information workbooks in `dir`, sorted by path for a
/// deterministic processing order.
pub fn discover_route_tables(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for ext in INPUT_EXTENSIONS {
        let pattern = dir
            .join(format!("*{INPUT_FILE_MARKER}*.{ext}"))
            .to_string_lossy()
            .into_owned();

        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if is_analysis_output(&path) {
                        debug!("Ignoring analysis output: {}", path.display());
                        continue;
                    }
                    files.push(path);
                }
                Err(e) => {
                    warn!("Skipping unreadable path during discovery: {}", e);
                }
            }
        }
    }

    files.sort();
    debug!("Discovered {} route-information workbooks", files.len());
    Ok(files)
}

/// Whether a path is one of this tool's own analysis outputs.
fn is_analysis_output(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
        .unwrap_or(false)
}
