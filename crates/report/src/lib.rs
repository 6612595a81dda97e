//! WAF assessment workbook
//!
//! Reads the architecture document and the support-case export, combines
//! them with the compiled-in assessment content and writes a five-sheet
//! workbook: `Overview`, `Scores`, `Recommendations`, `Roadmap` and
//! `SupportCases`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chrono::NaiveDate;
//! use wafreport_report::{build_workbook, ReportInputs};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let inputs = ReportInputs::under_root(Path::new("."), date);
//! let report = build_workbook(&inputs).unwrap();
//! assert_eq!(report.sheets.len(), 5);
//! ```

pub mod error;
mod inputs;
pub mod sheets;

use std::fs;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use wafreport_assessment::Assessment;
use wafreport_cases::CaseTable;
use wafreport_sheet::WorkbookReport;

pub use error::{ReportError, Result};
pub use inputs::{
    skill_dir, ReportInputs, ARCHITECTURE_FILE, OUTPUT_FILE, SKILL_DIR, SUPPORT_CASES_FILE,
};
pub use sheets::SHEET_ORDER;

/// Workbook title stored in the document properties
pub const DOCUMENT_TITLE: &str = "Azure WAF Assessment";

/// Build the report from `inputs` and save it to `inputs.output_xlsx`.
///
/// Parent directories of the output are created as needed.
pub fn build_workbook(inputs: &ReportInputs) -> Result<WorkbookReport> {
    inputs.check_exists()?;

    let architecture_md = fs::read_to_string(&inputs.architecture_md)
        .map_err(|e| ReportError::io(&inputs.architecture_md, e))?;
    let cases = CaseTable::from_csv(&inputs.support_cases_csv)?;
    tracing::info!(
        "Loaded {} support case(s) and {} bytes of architecture notes",
        cases.row_count(),
        architecture_md.len()
    );

    let (mut workbook, report) = assemble_workbook(
        &Assessment::azure_waf(),
        &architecture_md,
        &cases,
        inputs.assessment_date,
        Utc::now(),
    )?;

    if let Some(parent) = inputs.output_xlsx.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }
    }
    workbook.save(&inputs.output_xlsx)?;
    tracing::info!("Wrote {}", inputs.output_xlsx.display());

    Ok(report)
}

/// Lay out every sheet in memory without touching the filesystem.
pub fn assemble_workbook(
    assessment: &Assessment,
    architecture_md: &str,
    cases: &CaseTable,
    assessment_date: NaiveDate,
    created: DateTime<Utc>,
) -> Result<(Workbook, WorkbookReport)> {
    let mut workbook = Workbook::new();
    let properties = DocProperties::new()
        .set_title(DOCUMENT_TITLE)
        .set_creation_datetime(&excel_datetime(created)?);
    workbook.set_properties(&properties);

    let mut report = WorkbookReport::default();

    report.sheets.push(sheets::write_overview(
        workbook.add_worksheet(),
        assessment,
        assessment_date,
        architecture_md,
    )?);
    report
        .sheets
        .push(sheets::write_scores(workbook.add_worksheet(), assessment)?);
    report.sheets.push(sheets::write_recommendations(
        workbook.add_worksheet(),
        assessment,
    )?);
    report
        .sheets
        .push(sheets::write_roadmap(workbook.add_worksheet(), assessment)?);
    report
        .sheets
        .push(sheets::write_support_cases(workbook.add_worksheet(), cases)?);

    for sheet in &report.sheets {
        tracing::info!(
            sheet = %sheet.sheet_name,
            rows = sheet.rows_written,
            warnings = sheet.warnings.len(),
            "Sheet written"
        );
    }

    Ok((workbook, report))
}

fn excel_datetime(at: DateTime<Utc>) -> Result<ExcelDateTime> {
    let datetime = ExcelDateTime::from_ymd(at.year() as u16, at.month() as u8, at.day() as u8)?
        .and_hms(at.hour() as u16, at.minute() as u8, at.second() as u8)?;
    Ok(datetime)
}
