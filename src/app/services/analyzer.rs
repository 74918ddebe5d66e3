//! Analysis pipeline orchestration
//!
//! Ties the services together: per file, load the first sheet, resolve the
//! header, process the data rows, annotate main-line sections, and write
//! the analysis workbook. The directory run loop processes every
//! discovered workbook independently; a file that fails is logged,
//! counted, and skipped without aborting the run.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::mainline::annotate_mainline;
use super::route_parser::{ColumnMap, ParseStats, process_records};
use super::workbook::{discover_route_tables, load_first_sheet, output_path, write_results};
use crate::Result;
use crate::config::Config;

/// Outcome of one successfully processed workbook
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path of the analysis workbook that was written
    pub output: PathBuf,

    /// Parsing statistics for the file's data rows
    pub stats: ParseStats,

    /// Number of result records flagged as main-line sections
    pub mainline_sections: usize,
}

/// Statistics for one directory run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of route-information workbooks discovered
    pub files_discovered: usize,

    /// Number of workbooks processed to an output file
    pub files_processed: usize,

    /// Number of workbooks skipped after an error
    pub files_skipped: usize,

    /// Total result records written across all outputs
    pub records_written: usize,

    /// Total result records flagged as main-line sections
    pub mainline_sections: usize,

    /// Total run time
    pub elapsed: Duration,
}

/// Analyzer for route-information workbooks
#[derive(Debug)]
pub struct RouteTableAnalyzer {
    config: Config,
}

impl RouteTableAnalyzer {
    /// Create an analyzer with the given directory configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process every route-information workbook in the input directory.
    ///
    /// Per-file failures (unreadable workbook, missing header or columns)
    /// are logged and counted, and processing continues with the next
    /// file. Only environmental failures fail the run itself.
    pub fn process_directory(&self) -> Result<RunStats> {
        let start = Instant::now();
        self.config.validate()?;

        let files = discover_route_tables(&self.config.input_dir)?;
        info!(
            "Discovered {} route-information workbooks in {}",
            files.len(),
            self.config.input_dir.display()
        );

        let mut stats = RunStats {
            files_discovered: files.len(),
            ..Default::default()
        };

        let progress = create_file_progress_bar(files.len() as u64);

        for file in &files {
            match self.process_file(file) {
                Ok(report) => {
                    stats.files_processed += 1;
                    stats.records_written += report.stats.records_emitted;
                    stats.mainline_sections += report.mainline_sections;
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    stats.files_skipped += 1;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        stats.elapsed = start.elapsed();
        info!(
            "Run complete: {} processed, {} skipped, {} records written",
            stats.files_processed, stats.files_skipped, stats.records_written
        );

        Ok(stats)
    }

    /// Process one workbook into its analysis output file.
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("Processing {}", file_name);

        let sheet = load_first_sheet(path)?;
        let columns = ColumnMap::resolve(&sheet, &file_name)?;
        let route_records = columns.extract_records(&sheet);

        let parsed = process_records(&route_records);
        let mut results = parsed.records;

        let mainline_sections = annotate_mainline(&mut results, &route_records);

        let output = output_path(path, &self.config.output_dir);
        write_results(&output, &results)?;

        info!(
            "Wrote {}: {} records from {} rows ({} sub-entries discarded, {} main-line)",
            output.display(),
            parsed.stats.records_emitted,
            parsed.stats.rows_processed,
            parsed.stats.entries_discarded,
            mainline_sections
        );

        Ok(FileReport {
            output,
            stats: parsed.stats,
            mainline_sections,
        })
    }
}

/// Create a progress bar for the per-file run loop
fn create_file_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Analyzing route tables");
    pb
}
