use crate::error::Result;
use crate::table::CaseTable;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// CSV reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvOptions {
    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }
}

impl CaseTable {
    /// Load cases from a CSV file whose first line is the header
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Load cases from a CSV file with custom options
    pub fn from_csv_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading support cases from {}", path.display());
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file), options)
    }

    /// Load cases from a CSV string
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes(), CsvOptions::default())
    }

    /// Load cases from a reader
    ///
    /// Short records are padded with empty values and surplus fields are
    /// dropped, so every row lines up with the header.
    pub fn from_csv_reader<R: Read>(reader: R, options: CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false) // We handle headers ourselves
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?
                .iter()
                .enumerate()
                .map(|(idx, field)| {
                    if idx == 0 {
                        field.trim_start_matches(UTF8_BOM).to_string()
                    } else {
                        field.to_string()
                    }
                })
                .collect(),
            None => return Ok(CaseTable::default()),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            if record.len() > headers.len() {
                tracing::debug!(
                    "Dropping {} surplus field(s) on case row {}",
                    record.len() - headers.len(),
                    rows.len() + 1
                );
            }
            rows.push(record.iter().map(ToString::to_string).collect());
        }

        Ok(CaseTable::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_and_rows() {
        let cases = CaseTable::from_csv_str("id,title\n1,first\n2,second\n").unwrap();

        assert_eq!(cases.headers(), ["id", "title"]);
        assert_eq!(cases.row_count(), 2);
        assert_eq!(cases.get(1, "title"), Some("second"));
    }

    #[test]
    fn test_csv_quoted_multiline_field() {
        let cases =
            CaseTable::from_csv_str("id,resolution\n1,\"line one\nline two, with comma\"\n")
                .unwrap();

        assert_eq!(cases.row_count(), 1);
        assert_eq!(
            cases.get(0, "resolution"),
            Some("line one\nline two, with comma")
        );
    }

    #[test]
    fn test_csv_strips_byte_order_mark() {
        let cases = CaseTable::from_csv_str("\u{feff}ticketnumber,title\n1,x\n").unwrap();
        assert_eq!(cases.headers()[0], "ticketnumber");
    }

    #[test]
    fn test_csv_ragged_rows() {
        let cases = CaseTable::from_csv_str("a,b,c\n1\n1,2,3,4\n").unwrap();

        assert_eq!(cases.rows()[0], vec!["1", "", ""]);
        assert_eq!(cases.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_csv_empty_and_header_only() {
        let empty = CaseTable::from_csv_str("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.col_count(), 0);

        let header_only = CaseTable::from_csv_str("id,title\n").unwrap();
        assert!(header_only.is_empty());
        assert_eq!(header_only.col_count(), 2);
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let cases = CaseTable::from_csv_reader(
            "id;title\n1;x\n".as_bytes(),
            CsvOptions::default().with_delimiter(b';'),
        )
        .unwrap();

        assert_eq!(cases.get(0, "title"), Some("x"));
    }

    #[test]
    fn test_csv_custom_quote() {
        let cases = CaseTable::from_csv_reader(
            "id,title\n1,'a, b'\n".as_bytes(),
            CsvOptions::default().with_quote(b'\''),
        )
        .unwrap();

        assert_eq!(cases.col_count(), 2);
        assert_eq!(cases.get(0, "title"), Some("a, b"));
    }
}
