//! Styled worksheet authoring on top of `rust_xlsxwriter`
//!
//! The pieces a fixed-layout report needs: style specs that merge like
//! patches, header-plus-body blocks bound as Excel tables, column widths,
//! frozen panes and banded conditional fills. Every write records what it
//! did in a [`SheetReport`], including non-fatal warnings such as truncated
//! cell text or renamed headers.
//!
//! # Examples
//!
//! ```
//! use rust_xlsxwriter::Workbook;
//! use wafreport_sheet::{header_style, write_table_block, SheetReport, TableBlock};
//!
//! let mut workbook = Workbook::new();
//! let worksheet = workbook.add_worksheet();
//! let mut report = SheetReport::new("Data");
//!
//! let block = TableBlock::new("DataTable", vec!["Name".into(), "Qty".into()])
//!     .with_rows(vec![vec!["Apple".into(), 10u32.into()]])
//!     .with_header_style(header_style())
//!     .with_widths(&[(0, 20.0), (1, 8.0)]);
//!
//! write_table_block(worksheet, &block, &mut report).unwrap();
//! assert_eq!(report.rows_written, 1);
//! assert_eq!(report.tables, vec!["DataTable"]);
//! ```

pub mod error;
pub mod layout;
pub mod report;
pub mod style;
pub mod table;
pub mod text;

pub use error::{Result, SheetError};
pub use layout::{add_band_rules, cast_col, cast_row, freeze_rows, set_col_widths, BandRule};
pub use report::{SheetReport, WorkbookReport};
pub use style::{
    header_style, wrapped_body_style, wrapped_header_style, CellStyle, HAlign, VAlign,
    HEADER_FILL,
};
pub use table::{validate_table_name, write_table_block, CellValue, TableBlock};
pub use text::{dedupe_headers, fit_cell_text, MAX_CELL_CHARS};
