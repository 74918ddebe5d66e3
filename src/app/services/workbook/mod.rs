//! Workbook plumbing for route-information tables
//!
//! File-level collaborators around the parsing core:
//! - [`discovery`] - Locating route-information workbooks in a directory
//! - [`reader`] - Loading the first sheet of a workbook as an untyped grid
//! - [`writer`] - Writing the analysis result workbook

pub mod discovery;
pub mod reader;
pub mod writer;

// Re-export main entry points for easy access
pub use discovery::discover_route_tables;
pub use reader::load_first_sheet;
pub use writer::{output_path, write_results};
