//! One writer per report sheet.

use chrono::NaiveDate;
use rust_xlsxwriter::Worksheet;
use wafreport_assessment::{
    Assessment, ScoreBand, RECOMMENDATION_HEADERS, ROADMAP_HEADERS, SCORE_HEADERS,
};
use wafreport_cases::CaseTable;
use wafreport_sheet::{
    add_band_rules, fit_cell_text, freeze_rows, header_style, set_col_widths, write_table_block,
    wrapped_body_style, wrapped_header_style, BandRule, CellStyle, CellValue, HAlign,
    SheetReport, TableBlock, VAlign,
};

use crate::error::Result;

pub const OVERVIEW: &str = "Overview";
pub const SCORES: &str = "Scores";
pub const RECOMMENDATIONS: &str = "Recommendations";
pub const ROADMAP: &str = "Roadmap";
pub const SUPPORT_CASES: &str = "SupportCases";

/// Sheet names in workbook order
pub const SHEET_ORDER: [&str; 5] = [OVERVIEW, SCORES, RECOMMENDATIONS, ROADMAP, SUPPORT_CASES];

// Overview rows (zero-based)
const TITLE_ROW: u32 = 0;
const DATE_ROW: u32 = 2;
const SUMMARY_ROW: u32 = 3;
const ARCHITECTURE_LABEL_ROW: u32 = 5;
const ARCHITECTURE_ROW: u32 = 6;
const ARCHITECTURE_ROW_HEIGHT: f64 = 320.0;
/// Rows above the architecture label stay visible
const OVERVIEW_FROZEN_ROWS: usize = ARCHITECTURE_LABEL_ROW as usize;

const SUPPORT_CASE_WIDTHS: [f64; 8] = [
    12.0, // ticketnumber
    44.0, // title
    12.0, // createdon
    28.0, // product
    60.0, // root cause
    56.0, // customer statement
    56.0, // resolution
    28.0, // fullpath
];

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|s| CellValue::from(*s)).collect()
}

fn widths(values: &[f64]) -> Vec<(usize, f64)> {
    values.iter().copied().enumerate().collect()
}

/// Title, run metadata and the full architecture document.
pub fn write_overview(
    worksheet: &mut Worksheet,
    assessment: &Assessment,
    assessment_date: NaiveDate,
    architecture_md: &str,
) -> Result<SheetReport> {
    let mut report = SheetReport::new(OVERVIEW);
    worksheet.set_name(OVERVIEW)?;

    let fmt_title = CellStyle::new().bold().font_size(16).to_format();
    let fmt_label = CellStyle::new().bold().to_format();
    let fmt_document = wrapped_body_style().to_format();

    worksheet.write_string_with_format(TITLE_ROW, 0, assessment.title, &fmt_title)?;

    worksheet.write_string_with_format(DATE_ROW, 0, "Assessment Date", &fmt_label)?;
    worksheet.write_string(DATE_ROW, 1, assessment_date.format("%Y-%m-%d").to_string())?;
    worksheet.write_string_with_format(SUMMARY_ROW, 0, "Architecture Summary", &fmt_label)?;
    worksheet.write_string(SUMMARY_ROW, 1, assessment.summary)?;

    worksheet.write_string_with_format(
        ARCHITECTURE_LABEL_ROW,
        0,
        "Source Architecture Document (excerpt)",
        &fmt_label,
    )?;
    let document = fit_cell_text(architecture_md, &mut report);
    worksheet.write_string_with_format(ARCHITECTURE_ROW, 0, &*document, &fmt_document)?;

    set_col_widths(worksheet, &widths(&[28.0, 120.0]))?;
    worksheet.set_row_height(ARCHITECTURE_ROW, ARCHITECTURE_ROW_HEIGHT)?;
    freeze_rows(worksheet, OVERVIEW_FROZEN_ROWS)?;

    Ok(report)
}

/// Pillar scores with banded fills on the score column.
pub fn write_scores(worksheet: &mut Worksheet, assessment: &Assessment) -> Result<SheetReport> {
    let mut report = SheetReport::new(SCORES);
    worksheet.set_name(SCORES)?;

    let rows: Vec<Vec<CellValue>> = assessment
        .scores
        .iter()
        .map(|s| vec![s.label.into(), s.score.into(), s.status.into()])
        .collect();
    let n_rows = rows.len();

    let top = CellStyle::new().valign(VAlign::Top);
    let block = TableBlock::new("ScoresTable", headers(&SCORE_HEADERS))
        .with_rows(rows)
        .with_header_style(header_style())
        .with_col_style(0, top)
        .with_col_style(1, CellStyle::new().align(HAlign::Center))
        .with_col_style(2, top)
        .with_widths(&widths(&[28.0, 10.0, 35.0]));
    write_table_block(worksheet, &block, &mut report)?;

    if n_rows > 0 {
        let rules: Vec<BandRule> = ScoreBand::ALL
            .iter()
            .map(|band| {
                let (min, max) = band.bounds();
                BandRule {
                    min: min.map(f64::from),
                    max: max.map(f64::from),
                    fill: band.fill_color(),
                }
            })
            .collect();
        add_band_rules(worksheet, 1, n_rows, 1, &rules)?;
    }

    Ok(report)
}

pub fn write_recommendations(
    worksheet: &mut Worksheet,
    assessment: &Assessment,
) -> Result<SheetReport> {
    let mut report = SheetReport::new(RECOMMENDATIONS);
    worksheet.set_name(RECOMMENDATIONS)?;

    let rows = assessment
        .recommendations
        .iter()
        .map(|rec| text_row(&rec.to_row()))
        .collect();

    let block = TableBlock::new("RecommendationsTable", headers(&RECOMMENDATION_HEADERS))
        .with_rows(rows)
        .with_header_style(wrapped_header_style())
        .with_body_style(wrapped_body_style())
        .with_widths(&widths(&[10.0, 46.0, 26.0, 38.0, 34.0, 10.0, 16.0, 22.0, 60.0]));
    write_table_block(worksheet, &block, &mut report)?;

    Ok(report)
}

pub fn write_roadmap(worksheet: &mut Worksheet, assessment: &Assessment) -> Result<SheetReport> {
    let mut report = SheetReport::new(ROADMAP);
    worksheet.set_name(ROADMAP)?;

    let rows = assessment
        .roadmap
        .iter()
        .map(|item| text_row(&item.to_row()))
        .collect();

    let block = TableBlock::new("RoadmapTable", headers(&ROADMAP_HEADERS))
        .with_rows(rows)
        .with_header_style(wrapped_header_style())
        .with_body_style(wrapped_body_style())
        .with_widths(&widths(&[14.0, 22.0, 110.0]));
    write_table_block(worksheet, &block, &mut report)?;

    Ok(report)
}

/// The support cases exactly as exported. Without case rows the sheet is left
/// blank apart from its frozen pane.
pub fn write_support_cases(worksheet: &mut Worksheet, cases: &CaseTable) -> Result<SheetReport> {
    let mut report = SheetReport::new(SUPPORT_CASES);
    worksheet.set_name(SUPPORT_CASES)?;

    if cases.is_empty() {
        freeze_rows(worksheet, 1)?;
        tracing::info!("No support cases; {SUPPORT_CASES} left blank");
        return Ok(report);
    }

    let rows = cases
        .rows()
        .iter()
        .map(|row| row.iter().map(|v| CellValue::from(v.as_str())).collect())
        .collect();
    let n_widths = usize::min(cases.col_count(), SUPPORT_CASE_WIDTHS.len());

    let block = TableBlock::new("SupportCasesTable", cases.headers().to_vec())
        .with_rows(rows)
        .with_header_style(wrapped_header_style())
        .with_body_style(wrapped_body_style())
        .with_widths(&widths(&SUPPORT_CASE_WIDTHS[..n_widths]));
    write_table_block(worksheet, &block, &mut report)?;

    Ok(report)
}
