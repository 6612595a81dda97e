//! Worksheet geometry: index casts, widths, panes and conditional fills.

use rust_xlsxwriter::{
    Color, ConditionalFormatCell, ConditionalFormatCellRule, Format, Worksheet,
};

use crate::error::{Result, SheetError};

pub fn cast_row(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| SheetError::RowOverflow(value))
}

pub fn cast_col(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| SheetError::ColOverflow(value))
}

/// Set widths for `(zero-based column, width)` pairs.
pub fn set_col_widths(worksheet: &mut Worksheet, widths: &[(usize, f64)]) -> Result<()> {
    for (col, width) in widths {
        worksheet.set_column_width(cast_col(*col)?, *width)?;
    }
    Ok(())
}

/// Freeze the top `n_rows` rows.
pub fn freeze_rows(worksheet: &mut Worksheet, n_rows: usize) -> Result<()> {
    worksheet.set_freeze_panes(cast_row(n_rows)?, 0)?;
    Ok(())
}

/// A numeric band highlighted with a solid fill.
///
/// Bounds are inclusive; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Fill as `0xRRGGBB`
    pub fill: u32,
}

impl BandRule {
    /// Cell-value rule for this band, or `None` when both sides are open.
    ///
    /// An open lower side is written as `< max + 1` so whole-number scores
    /// read naturally (`< 60` rather than `<= 59`).
    #[must_use]
    pub fn to_cell_rule(&self) -> Option<ConditionalFormatCellRule<f64>> {
        match (self.min, self.max) {
            (None, Some(max)) => Some(ConditionalFormatCellRule::LessThan(max + 1.0)),
            (Some(min), Some(max)) => Some(ConditionalFormatCellRule::Between(min, max)),
            (Some(min), None) => Some(ConditionalFormatCellRule::GreaterThanOrEqualTo(min)),
            (None, None) => None,
        }
    }
}

/// Add one conditional fill per band over `col` in rows `first_row..=last_row`.
pub fn add_band_rules(
    worksheet: &mut Worksheet,
    first_row: usize,
    last_row: usize,
    col: usize,
    rules: &[BandRule],
) -> Result<()> {
    let (first_row, last_row, col) = (cast_row(first_row)?, cast_row(last_row)?, cast_col(col)?);

    for band in rules {
        let Some(rule) = band.to_cell_rule() else {
            tracing::debug!("Skipping unbounded band rule");
            continue;
        };
        let fill = Format::new().set_background_color(Color::RGB(band.fill));
        let conditional = ConditionalFormatCell::new().set_rule(rule).set_format(fill);
        worksheet.add_conditional_format(first_row, col, last_row, col, &conditional)?;
    }

    Ok(())
}
