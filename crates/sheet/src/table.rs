//! Header-plus-body grids bound as Excel tables.

use std::collections::BTreeMap;

use rust_xlsxwriter::{Format, Table, TableColumn, TableStyle, Worksheet};

use crate::error::{Result, SheetError};
use crate::layout::{cast_col, cast_row, freeze_rows, set_col_widths};
use crate::report::SheetReport;
use crate::style::CellStyle;
use crate::text::{dedupe_headers, fit_cell_text};

const TABLE_NAME_MAX: usize = 255;

/// Value of one body cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    String(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A table anchored at A1: one header row followed by body rows.
#[derive(Debug, Clone, Default)]
pub struct TableBlock {
    /// Excel table name (`ScoresTable`)
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// `(zero-based column, width)` pairs
    pub col_widths: Vec<(usize, f64)>,
    pub header_style: CellStyle,
    /// Style for every body cell
    pub body_style: CellStyle,
    /// Per-column patches merged over `body_style`
    pub col_styles: BTreeMap<usize, CellStyle>,
    /// Freeze panes below the header row
    pub freeze_header: bool,
}

impl TableBlock {
    #[must_use]
    pub fn new(name: &str, headers: Vec<String>) -> Self {
        TableBlock {
            name: name.to_string(),
            headers,
            freeze_header: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<CellValue>>) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_widths(mut self, widths: &[(usize, f64)]) -> Self {
        self.col_widths = widths.to_vec();
        self
    }

    #[must_use]
    pub fn with_header_style(mut self, style: CellStyle) -> Self {
        self.header_style = style;
        self
    }

    #[must_use]
    pub fn with_body_style(mut self, style: CellStyle) -> Self {
        self.body_style = style;
        self
    }

    #[must_use]
    pub fn with_col_style(mut self, col: usize, style: CellStyle) -> Self {
        self.col_styles.insert(col, style);
        self
    }

    /// Inclusive `(first_row, first_col, last_row, last_col)` of the table
    #[must_use]
    pub fn extent(&self) -> (usize, usize, usize, usize) {
        (0, 0, self.rows.len(), self.headers.len().saturating_sub(1))
    }

    fn body_formats(&self) -> Vec<Format> {
        (0..self.headers.len())
            .map(|col| match self.col_styles.get(&col) {
                Some(patch) => self.body_style.merge(patch).to_format(),
                None => self.body_style.to_format(),
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        validate_table_name(&self.name)?;
        if self.headers.is_empty() {
            return Err(SheetError::EmptyHeaders {
                name: self.name.clone(),
            });
        }
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != self.headers.len() {
                return Err(SheetError::RowWidthMismatch {
                    name: self.name.clone(),
                    row: idx,
                    expected: self.headers.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }
}

/// Check a name against Excel's table naming rules.
pub fn validate_table_name(name: &str) -> Result<()> {
    let invalid = || SheetError::InvalidTableName {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid());
    };
    if !(first.is_alphabetic() || first == '_' || first == '\\') {
        return Err(invalid());
    }
    if name.chars().count() > TABLE_NAME_MAX
        || !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        || looks_like_cell_reference(name)
    {
        return Err(invalid());
    }
    Ok(())
}

/// `A1`, `XFD1048576` and `R1C1` style names collide with references.
fn looks_like_cell_reference(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    let letters = upper.chars().take_while(char::is_ascii_alphabetic).count();
    let digits = &upper[letters..];
    let is_a1 = (1..=3).contains(&letters)
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit());
    is_a1 || upper == "R" || upper == "C"
}

/// Write `block` at A1 of `worksheet` and bind it as a table.
///
/// A block without body rows keeps its header but gets no table, since Excel
/// tables need at least one data row.
pub fn write_table_block(
    worksheet: &mut Worksheet,
    block: &TableBlock,
    report: &mut SheetReport,
) -> Result<()> {
    block.validate()?;

    let headers = dedupe_headers(&block.headers, report);
    let fmt_header = block.header_style.to_format();
    let fmts_body = block.body_formats();

    for (col_idx, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, cast_col(col_idx)?, header, &fmt_header)?;
    }

    for (row_idx, row) in block.rows.iter().enumerate() {
        let row_num = cast_row(row_idx + 1)?;
        for (col_idx, value) in row.iter().enumerate() {
            let col_num = cast_col(col_idx)?;
            let format = &fmts_body[col_idx];
            match value {
                CellValue::Null => {
                    worksheet.write_blank(row_num, col_num, format)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row_num, col_num, *n, format)?;
                }
                CellValue::String(s) => {
                    let text = fit_cell_text(s, report);
                    worksheet.write_string_with_format(row_num, col_num, &*text, format)?;
                }
            }
        }
    }
    report.rows_written += block.rows.len();

    set_col_widths(worksheet, &block.col_widths)?;
    if block.freeze_header {
        freeze_rows(worksheet, 1)?;
    }

    if block.rows.is_empty() {
        report.warn(format!("Table {} has no rows; header written without a table.", block.name));
        return Ok(());
    }

    let columns: Vec<TableColumn> = headers
        .iter()
        .map(|header| {
            TableColumn::new()
                .set_header(header)
                .set_header_format(fmt_header.clone())
        })
        .collect();

    let table = Table::new()
        .set_name(&block.name)
        .set_style(TableStyle::Medium9)
        .set_banded_rows(true)
        .set_banded_columns(false)
        .set_first_column(false)
        .set_last_column(false)
        .set_autofilter(true)
        .set_columns(&columns);

    let (first_row, first_col, last_row, last_col) = block.extent();
    worksheet.add_table(
        cast_row(first_row)?,
        cast_col(first_col)?,
        cast_row(last_row)?,
        cast_col(last_col)?,
        &table,
    )?;
    report.tables.push(block.name.clone());

    tracing::debug!(
        table = %block.name,
        rows = block.rows.len(),
        cols = headers.len(),
        "Added table"
    );

    Ok(())
}
