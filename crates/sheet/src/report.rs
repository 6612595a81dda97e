/// What one worksheet ended up containing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetReport {
    pub sheet_name: String,
    /// Body rows written below any header
    pub rows_written: usize,
    /// Excel tables added to the sheet
    pub tables: Vec<String>,
    /// Non-fatal warnings
    pub warnings: Vec<String>,
}

impl SheetReport {
    #[must_use]
    pub fn new(sheet_name: &str) -> Self {
        SheetReport {
            sheet_name: sheet_name.to_string(),
            ..Default::default()
        }
    }

    /// Record a warning and log it.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        tracing::warn!(sheet = %self.sheet_name, "{msg}");
        self.warnings.push(msg.to_string());
    }
}

/// Per-sheet reports for a whole workbook, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkbookReport {
    pub sheets: Vec<SheetReport>,
}

impl WorkbookReport {
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&SheetReport> {
        self.sheets.iter().find(|s| s.sheet_name == name)
    }

    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.sheet_name.as_str()).collect()
    }

    /// All warnings prefixed with their sheet name
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.sheets
            .iter()
            .flat_map(|s| s.warnings.iter().map(move |w| format!("{}: {w}", s.sheet_name)))
            .collect()
    }
}
