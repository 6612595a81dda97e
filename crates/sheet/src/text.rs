//! Cell text normalization.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::report::SheetReport;

/// Excel's per-cell character limit
pub const MAX_CELL_CHARS: usize = 32_767;

/// Clamp `text` to what a single cell can hold.
///
/// Longer text is cut on a char boundary and a warning is recorded.
pub fn fit_cell_text<'a>(text: &'a str, report: &mut SheetReport) -> Cow<'a, str> {
    let n_chars = text.chars().count();
    if n_chars <= MAX_CELL_CHARS {
        return Cow::Borrowed(text);
    }

    report.warn(format!(
        "Cell text truncated from {n_chars} to {MAX_CELL_CHARS} characters."
    ));
    Cow::Owned(text.chars().take(MAX_CELL_CHARS).collect())
}

/// Make header names usable as table columns.
///
/// Blank names become `ColumnN` (1-based position) and repeats get the next
/// free numeric suffix (`Name2`, `Name3`). Comparison is case-insensitive,
/// matching Excel.
pub fn dedupe_headers(headers: &[String], report: &mut SheetReport) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());

    for (idx, raw) in headers.iter().enumerate() {
        let base = if raw.trim().is_empty() {
            format!("Column{}", idx + 1)
        } else {
            raw.clone()
        };

        let mut name = base.clone();
        let mut n_suffix = 2usize;
        while seen.contains(&name.to_lowercase()) {
            name = format!("{base}{n_suffix}");
            n_suffix += 1;
        }

        if name != *raw {
            report.warn(format!("Header {raw:?} at column {} renamed to {name:?}.", idx + 1));
        }
        seen.insert(name.to_lowercase());
        out.push(name);
    }

    out
}
