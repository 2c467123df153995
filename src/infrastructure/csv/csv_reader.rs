// ============================================================
// CSV READER
// ============================================================
// Load a whole CSV file into a Table using a single-byte decoding

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::mem;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, Table};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV reader that never fails on encoding
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a CSV file into a table
    pub fn read_file(&self, path: &Path) -> Result<Table> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("Input file {} does not exist", path.display()))
            }
            _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        self.read_bytes(&bytes)
    }

    /// Decode raw bytes as Latin-1 and parse them.
    ///
    /// Every byte maps to exactly one character, so decoding cannot fail;
    /// multi-byte sequences survive as mojibake for later repair. A leading
    /// UTF-8 byte-order mark is dropped so it does not end up in the first
    /// header name.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let content = mem::decode_latin1(bytes);
        self.parse_content(&content)
    }

    /// Parse already decoded CSV content
    pub fn parse_content(&self, content: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(AppError::ParseError("CSV input has no header row".to_string()));
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Short rows are padded later; long rows would lose fields
            if record.len() > width {
                return Err(AppError::ParseError(format!(
                    "CSV row {} has {} fields, expected {}",
                    index + 1,
                    record.len(),
                    width
                )));
            }
            rows.push(Self::parse_row(&record));
        }

        Ok(Table::new(headers, rows))
    }

    fn parse_row(record: &StringRecord) -> Vec<Cell> {
        record.iter().map(Cell::from_field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::ColumnKind;

    #[test]
    fn test_parse_simple_csv() {
        let table = CsvReader::new()
            .parse_content("id,author,content\n1,Alice,hello\n2,Bob,\n")
            .unwrap();

        assert_eq!(table.headers(), &["id", "author", "content"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1][2], Cell::Missing);
        assert_eq!(table.column_kind(0), Some(ColumnKind::Integer));
        assert_eq!(table.column_kind(2), Some(ColumnKind::Text));
    }

    #[test]
    fn test_utf8_bytes_arrive_as_mojibake() {
        let table = CsvReader::new()
            .read_bytes("content\ncafé\n".as_bytes())
            .unwrap();

        assert_eq!(table.rows()[0][0], Cell::Text("cafÃ©".to_string()));
    }

    #[test]
    fn test_invalid_utf8_never_fails() {
        let table = CsvReader::new().read_bytes(b"content\n\xff\xfe\x80\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][0], Cell::Text("\u{FF}\u{FE}\u{80}".to_string()));
    }

    #[test]
    fn test_leading_bom_is_dropped() {
        let table = CsvReader::new()
            .read_bytes(b"\xEF\xBB\xBFcontent,id\nx,1\n")
            .unwrap();
        assert_eq!(table.column_index("content"), Some(0));
    }

    #[test]
    fn test_custom_delimiter_and_ragged_rows() {
        let table = CsvReader::new()
            .with_delimiter(b';')
            .parse_content("a;b;c\n1;2\n")
            .unwrap();
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][2], Cell::Missing);
    }

    #[test]
    fn test_row_longer_than_header_is_rejected() {
        let err = CsvReader::new()
            .read_bytes(b"id,content\n1,hello,EXTRA_DATA\n2,world\n")
            .unwrap_err();

        match err {
            AppError::ParseError(msg) => {
                assert_eq!(msg, "CSV row 1 has 3 fields, expected 2");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = CsvReader::new()
            .read_file(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
