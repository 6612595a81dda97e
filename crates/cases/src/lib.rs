//! Support-case records for the WAF assessment report
//!
//! Loads the support-case export (a CSV with a header line) into a
//! [`CaseTable`] that keeps the header order of the file, so the cases can be
//! copied into the report as-is.
//!
//! # Examples
//!
//! ```
//! use wafreport_cases::CaseTable;
//!
//! let cases = CaseTable::from_csv_str(
//!     "ticketnumber,title\n120012346,App Gateway 502\n",
//! ).unwrap();
//!
//! assert_eq!(cases.headers(), ["ticketnumber", "title"]);
//! assert_eq!(cases.row_count(), 1);
//! assert_eq!(cases.get(0, "title"), Some("App Gateway 502"));
//! ```

pub mod csv;
pub mod error;
mod table;

pub use crate::csv::CsvOptions;
pub use error::{CasesError, Result};
pub use table::CaseTable;
