//! End-to-end tests for the route-information analysis pipeline
//!
//! These tests fabricate real xlsx workbooks in a temporary directory,
//! run the analyzer over it exactly as the binary does, and read the
//! written analysis workbooks back.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use route_table_analyzer::Config;
use route_table_analyzer::app::services::analyzer::RouteTableAnalyzer;
use route_table_analyzer::app::services::workbook::load_first_sheet;

/// Write a workbook with one sheet of string cells
fn write_input_workbook(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, *cell).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn analyzer_for(dir: &TempDir) -> RouteTableAnalyzer {
    RouteTableAnalyzer::new(Config::in_dir(dir.path()))
}

#[test]
fn test_single_arrival_row_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_input_workbook(
        &dir.path().join("车站A进路信息表.xlsx"),
        &[
            &["车站A 联锁进路信息", "", "", ""],
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "到达", "201,202", "150\\区段A\\备注\\201-202DG"],
        ],
    );

    let stats = analyzer_for(&dir).process_directory().unwrap();
    assert_eq!(stats.files_discovered, 1);
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_skipped, 0);
    assert_eq!(stats.records_written, 1);

    let output = dir.path().join("车站A进路信息表_分析结果.xlsx");
    assert!(output.exists());

    let sheet = load_first_sheet(&output).unwrap();
    let rows = sheet.rows();
    assert_eq!(
        rows[0],
        vec!["轨道区段名称", "道岔组合", "区段长度", "备注", "正线标记"]
    );
    assert_eq!(rows[1][0], "201-202DG");
    assert_eq!(rows[1][1], "201,202");
    assert_eq!(rows[1][2], "150");
    assert_eq!(rows[1][3], "");
    assert_eq!(rows[1][4], "");
}

#[test]
fn test_departure_row_written_reversed() {
    let dir = TempDir::new().unwrap();
    write_input_workbook(
        &dir.path().join("车站B进路信息表.xlsx"),
        &[
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "正线发车", "201,202", "150\\区段A\\备注\\201-202DG"],
        ],
    );

    analyzer_for(&dir).process_directory().unwrap();

    let sheet = load_first_sheet(&dir.path().join("车站B进路信息表_分析结果.xlsx")).unwrap();
    assert_eq!(sheet.rows()[1][1], "202,201");
    assert_eq!(sheet.rows()[1][3], "道岔组合逆序");
}

#[test]
fn test_mainline_sections_flagged_across_rows() {
    let dir = TempDir::new().unwrap();
    write_input_workbook(
        &dir.path().join("车站C进路信息表.xlsx"),
        &[
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "正线接车", "201,202", "150\\区段A\\备注\\201DG"],
            &["2", "到达", "201", "160\\区段B\\备注\\201DG"],
            &["3", "到达", "305", "170\\区段C\\备注\\305DG"],
        ],
    );

    let stats = analyzer_for(&dir).process_directory().unwrap();
    assert_eq!(stats.mainline_sections, 2);

    let sheet = load_first_sheet(&dir.path().join("车站C进路信息表_分析结果.xlsx")).unwrap();
    let rows = sheet.rows();

    // The main-line row itself and the subset arrival both flag; the
    // unrelated section does not.
    assert_eq!(rows[1][0], "201DG");
    assert_eq!(rows[1][4], "正线区段");
    assert_eq!(rows[2][0], "201DG");
    assert_eq!(rows[2][4], "正线区段");
    assert_eq!(rows[3][0], "305DG");
    assert_eq!(rows[3][4], "");
}

#[test]
fn test_empty_track_cell_writes_fallback_record() {
    let dir = TempDir::new().unwrap();
    write_input_workbook(
        &dir.path().join("车站D进路信息表.xlsx"),
        &[
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "调车", "305"],
        ],
    );

    analyzer_for(&dir).process_directory().unwrap();

    let sheet = load_first_sheet(&dir.path().join("车站D进路信息表_分析结果.xlsx")).unwrap();
    let rows = sheet.rows();
    assert_eq!(rows[1][0], "");
    assert_eq!(rows[1][1], "305");
    assert_eq!(rows[1][2], "0");
    assert_eq!(rows[1][4], "");
}

#[test]
fn test_failed_file_skipped_and_run_continues() {
    let dir = TempDir::new().unwrap();
    // No header row anywhere in the first workbook.
    write_input_workbook(
        &dir.path().join("a进路信息表.xlsx"),
        &[&["无关内容", "备注"], &["abc", "def"]],
    );
    write_input_workbook(
        &dir.path().join("b进路信息表.xlsx"),
        &[
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "到达", "201", "150\\区段A\\备注\\201DG"],
        ],
    );

    let stats = analyzer_for(&dir).process_directory().unwrap();

    assert_eq!(stats.files_discovered, 2);
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_skipped, 1);
    assert!(!dir.path().join("a进路信息表_分析结果.xlsx").exists());
    assert!(dir.path().join("b进路信息表_分析结果.xlsx").exists());
}

#[test]
fn test_missing_column_skips_file() {
    let dir = TempDir::new().unwrap();
    // Header row is found via 序号 but carries no track-section column.
    write_input_workbook(
        &dir.path().join("c进路信息表.xlsx"),
        &[&["序号", "进路类型", "道岔"], &["1", "到达", "201"]],
    );

    let stats = analyzer_for(&dir).process_directory().unwrap();

    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_skipped, 1);
    assert!(!dir.path().join("c进路信息表_分析结果.xlsx").exists());
}

#[test]
fn test_rerun_ignores_previous_outputs() {
    let dir = TempDir::new().unwrap();
    write_input_workbook(
        &dir.path().join("车站E进路信息表.xlsx"),
        &[
            &["序号", "进路类型", "道岔", "轨道区段"],
            &["1", "到达", "201", "150\\区段A\\备注\\201DG"],
        ],
    );

    let first = analyzer_for(&dir).process_directory().unwrap();
    assert_eq!(first.files_processed, 1);

    // The output workbook's name still contains the input marker; a
    // second run must not pick it up as an input.
    let second = analyzer_for(&dir).process_directory().unwrap();
    assert_eq!(second.files_discovered, 1);
    assert_eq!(second.files_processed, 1);
}

#[test]
fn test_unreadable_workbook_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("d进路信息表.xlsx"), b"not a workbook").unwrap();

    let stats = analyzer_for(&dir).process_directory().unwrap();

    assert_eq!(stats.files_discovered, 1);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.files_processed, 0);
}
