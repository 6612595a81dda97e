/// Support cases keyed by the CSV header line.
///
/// Every row holds exactly one value per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CaseTable {
    /// Create a table from headers and rows, normalizing each row to the
    /// header width
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        CaseTable { headers, rows }
    }

    /// Column names in file order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows, each aligned with [`Self::headers`]
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// True when there are no case rows (headers alone do not count)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header, if present
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of one column, top to bottom
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Value at `row` under header `name`
    #[must_use]
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Iterate rows as `(header, value)` pairs
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(move |row| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }
}
