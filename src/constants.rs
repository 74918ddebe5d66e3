//! Application constants for the route table analyzer
//!
//! This module contains the domain keywords, cell markers, and file naming
//! conventions used throughout route-information table processing. The
//! source spreadsheets are Chinese-language interlocking tables, so the
//! domain constants are the literal strings found in those files.

// =============================================================================
// Header Detection and Column Resolution
// =============================================================================

/// Keywords identifying the header row. A row is the header when at least one
/// of its cells, after trimming, exactly equals one of these labels.
pub const HEADER_KEYWORDS: &[&str] = &["序号", "进路类型", "道岔", "轨道区段"];

/// Required logical column: switch combinations (道岔)
pub const SWITCH_COLUMN: &str = "道岔";

/// Required logical column: track sections (轨道区段)
pub const TRACK_COLUMN: &str = "轨道区段";

/// Required logical column: route type (进路类型)
pub const ROUTE_TYPE_COLUMN: &str = "进路类型";

// =============================================================================
// Route Type Labels
// =============================================================================

/// Route type categories that drive processing behavior
pub mod route_types {
    /// Substring marking departure routes, whose switch combinations are
    /// emitted in reverse order
    pub const DEPARTURE_MARKER: &str = "发车";

    /// Main-line receiving route
    pub const MAINLINE_RECEIVE: &str = "正线接车";

    /// Reverse-direction main-line receiving route
    pub const MAINLINE_RECEIVE_REVERSE: &str = "反向正线接车";

    /// Route types whose rows define main-line membership. Matched by exact
    /// equality against the trimmed route-type cell.
    pub const MAINLINE_LABELS: &[&str] = &[MAINLINE_RECEIVE, MAINLINE_RECEIVE_REVERSE];
}

// =============================================================================
// Output Cell Markers
// =============================================================================

/// Fixed marker strings written into result cells
pub mod markers {
    /// Placeholder for an empty switch combination (无)
    pub const EMPTY_COMBO: &str = "无";

    /// Remark set when a departure route's switch combination was reversed
    pub const REVERSED_REMARK: &str = "道岔组合逆序";

    /// Flag set on sections that belong to a main line
    pub const MAINLINE_FLAG: &str = "正线区段";
}

// =============================================================================
// Cell Text Normalization
// =============================================================================

/// Literal line-break marker replaced with a comma before splitting track cells
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Separator used when joining switch tokens into a combination string
pub const COMBO_SEPARATOR: &str = ",";

// =============================================================================
// File Naming
// =============================================================================

/// Substring a workbook file name must contain to be picked up for processing
pub const INPUT_FILE_MARKER: &str = "进路信息表";

/// Workbook extensions considered during discovery
pub const INPUT_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Suffix appended to the input file stem to form the output file name
pub const OUTPUT_SUFFIX: &str = "_分析结果";

/// Output workbooks are always written as xlsx, regardless of input extension
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Output column headers, in the fixed order they are written
pub const OUTPUT_COLUMNS: &[&str] = &["轨道区段名称", "道岔组合", "区段长度", "备注", "正线标记"];

/// Build the output file name for an input file stem
pub fn output_file_name(input_stem: &str) -> String {
    format!("{}{}.{}", input_stem, OUTPUT_SUFFIX, OUTPUT_EXTENSION)
}
