use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;
use wafreport_sheet::{
    add_band_rules, header_style, write_table_block, BandRule, CellValue, SheetError,
    SheetReport, TableBlock, MAX_CELL_CHARS,
};

fn read_part(path: &Path, part: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name(part)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn open(path: &Path) -> Xlsx<BufReader<File>> {
    open_workbook(path).unwrap()
}

#[test]
fn test_table_block_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("block.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Fruit").unwrap();

    let mut report = SheetReport::new("Fruit");
    let block = TableBlock::new("FruitTable", vec!["Name".into(), "Qty".into()])
        .with_rows(vec![
            vec!["Apple".into(), 10u32.into()],
            vec!["Banana".into(), CellValue::Null],
        ])
        .with_header_style(header_style())
        .with_widths(&[(0, 20.0), (1, 8.0)]);
    write_table_block(worksheet, &block, &mut report).unwrap();
    workbook.save(&path).unwrap();

    assert_eq!(report.rows_written, 2);
    assert_eq!(report.tables, vec!["FruitTable"]);
    assert!(report.warnings.is_empty());

    let mut wb = open(&path);
    let range = wb.worksheet_range("Fruit").unwrap();
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Name".to_string())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("Apple".to_string())));
    assert!(matches!(range.get_value((1, 1)), Some(Data::Float(f)) if (*f - 10.0).abs() < 0.01));

    let table_xml = read_part(&path, "xl/tables/table1.xml");
    assert!(table_xml.contains(r#"displayName="FruitTable""#));
    assert!(table_xml.contains(r#"ref="A1:B3""#));
    assert!(table_xml.contains("TableStyleMedium9"));
    assert!(table_xml.contains(r#"showRowStripes="1""#));

    let sheet_xml = read_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet_xml.contains(r#"<pane ySplit="1""#));
}

#[test]
fn test_empty_block_writes_header_only() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let mut report = SheetReport::new("Empty");

    let block = TableBlock::new("EmptyTable", vec!["Only".into()]);
    write_table_block(worksheet, &block, &mut report).unwrap();

    assert!(report.tables.is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_bad_table_name_is_rejected() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let mut report = SheetReport::new("Bad");

    let block = TableBlock::new("has space", vec!["A".into()]).with_rows(vec![vec!["x".into()]]);
    let result = write_table_block(worksheet, &block, &mut report);

    assert!(matches!(result, Err(SheetError::InvalidTableName { .. })));
}

#[test]
fn test_long_text_is_truncated_not_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Long").unwrap();
    let mut report = SheetReport::new("Long");

    let block = TableBlock::new("LongTable", vec!["Text".into()])
        .with_rows(vec![vec!["x".repeat(MAX_CELL_CHARS + 1).into()]]);
    write_table_block(worksheet, &block, &mut report).unwrap();
    workbook.save(&path).unwrap();

    assert_eq!(report.warnings.len(), 1);

    let mut wb = open(&path);
    let range = wb.worksheet_range("Long").unwrap();
    match range.get_value((1, 0)) {
        Some(Data::String(s)) => assert_eq!(s.len(), MAX_CELL_CHARS),
        other => panic!("Expected string, got {other:?}"),
    }
}

#[test]
fn test_band_rules_emit_conditional_formats() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bands.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row, score) in [(1u32, 55.0), (2, 70.0), (3, 90.0)] {
        worksheet.write_number(row, 1, score).unwrap();
    }
    add_band_rules(
        worksheet,
        1,
        3,
        1,
        &[
            BandRule { min: None, max: Some(59.0), fill: 0xF8_D7DA },
            BandRule { min: Some(60.0), max: Some(79.0), fill: 0xFF_F3CD },
            BandRule { min: Some(80.0), max: None, fill: 0xD1_E7DD },
        ],
    )
    .unwrap();
    workbook.save(&path).unwrap();

    let sheet_xml = read_part(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet_xml.matches("<cfRule").count(), 3);
    assert!(sheet_xml.contains(r#"operator="lessThan""#));
    assert!(sheet_xml.contains(r#"operator="between""#));
    assert!(sheet_xml.contains(r#"operator="greaterThanOrEqual""#));
    assert!(sheet_xml.contains(r#"sqref="B2:B4""#));

    // Each rule points at the fill of its own band
    for (idx, operator) in ["lessThan", "between", "greaterThanOrEqual"]
        .iter()
        .enumerate()
    {
        let rule = format!(r#"dxfId="{idx}" priority="{}" operator="{operator}""#, idx + 1);
        assert!(sheet_xml.contains(&rule), "{rule}");
    }

    let styles_xml = read_part(&path, "xl/styles.xml");
    let dxfs = &styles_xml[styles_xml.find("<dxfs").unwrap()..styles_xml.find("</dxfs>").unwrap()];
    assert_eq!(dxfs.matches("<dxf>").count(), 3);
    let fills: Vec<usize> = ["FFF8D7DA", "FFFFF3CD", "FFD1E7DD"]
        .iter()
        .map(|rgb| {
            dxfs.find(&format!(r#"<bgColor rgb="{rgb}"/>"#))
                .unwrap_or_else(|| panic!("no dxf fill {rgb}"))
        })
        .collect();
    assert!(fills.windows(2).all(|pair| pair[0] < pair[1]));
}
