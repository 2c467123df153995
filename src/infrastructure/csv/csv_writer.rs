// ============================================================
// CSV WRITER
// ============================================================
// Write a Table as UTF-8 with a leading byte-order mark

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// BOM-prefixed UTF-8 CSV writer, readable by spreadsheet tools as-is
#[derive(Default)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the table to a file, replacing it if it exists
    pub fn write_file(&self, table: &Table, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut out = BufWriter::new(file);
        self.write_to(table, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the table to any sink; missing cells become empty fields
    pub fn write_to<W: Write>(&self, table: &Table, out: &mut W) -> Result<()> {
        out.write_all(UTF8_BOM)?;

        let mut writer = WriterBuilder::new().from_writer(out);

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.as_field()))?;
        }
        writer.flush()?;
        Ok(())
    }
}
