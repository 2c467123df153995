// ============================================================
// CSV CLEANER USE CASE
// ============================================================
// Load a CSV, repair mojibake in text columns, normalize one column,
// export as BOM-prefixed UTF-8

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::table::{Cell, ColumnKind, Table};
use crate::infrastructure::config::CleanerConfig;
use crate::infrastructure::csv::{CsvReader, CsvWriter};
use crate::infrastructure::storage::ensure_parent_dir;
use crate::infrastructure::text::{normalize_text, repair_mojibake};

/// Outcome of one clean run
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub row_count: usize,

    /// Names of the columns the repair was applied to
    pub text_columns: Vec<String>,

    /// Cells whose value changed under repair
    pub repaired_cells: usize,

    pub output_path: PathBuf,

    /// First values of the normalized column
    pub preview: Vec<String>,

    pub processing_time_ms: u64,
}

pub struct CsvCleaner {
    config: CleanerConfig,
}

impl CsvCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline from `input_path` to `output_path`
    pub fn clean_file(&self) -> Result<CleanReport> {
        let start = Instant::now();

        self.config.validate()?;

        info!(input = %self.config.input_path.display(), "[1/4] Reading CSV as Latin-1");
        let mut table = CsvReader::new().read_file(&self.config.input_path)?;

        let (text_columns, repaired_cells) = self.clean_table(&mut table)?;

        info!(output = %self.config.output_path.display(), "[4/4] Exporting as UTF-8 with BOM");
        ensure_parent_dir(&self.config.output_path)?;
        CsvWriter::new().write_file(&table, &self.config.output_path)?;

        let preview = self.preview(&table)?;
        for (idx, value) in preview.iter().enumerate() {
            info!("{}. {}", idx + 1, value);
        }
        info!(
            rows = table.row_count(),
            repaired_cells,
            "Wrote clean file {}",
            self.config.output_path.display()
        );

        Ok(CleanReport {
            row_count: table.row_count(),
            text_columns,
            repaired_cells,
            output_path: self.config.output_path.clone(),
            preview,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Repair and normalize an in-memory table.
    ///
    /// Returns the repaired column names and the number of changed cells.
    /// Fails without touching the table when the text column is absent.
    pub fn clean_table(&self, table: &mut Table) -> Result<(Vec<String>, usize)> {
        let text_idx = table.require_column(&self.config.text_column)?;

        info!("[2/4] Repairing UTF-8 read as Latin-1 in text columns");
        let (text_columns, repaired_cells) = repair_text_columns(table);

        info!(column = %self.config.text_column, "[3/4] Normalizing column");
        normalize_column(table, text_idx);

        Ok((text_columns, repaired_cells))
    }

    /// First `preview_rows` values of the normalized column
    pub fn preview(&self, table: &Table) -> Result<Vec<String>> {
        let idx = table.require_column(&self.config.text_column)?;
        Ok(table
            .column(idx)
            .take(self.config.preview_rows)
            .map(|cell| cell.as_field().to_string())
            .collect())
    }
}

/// Apply the mojibake repair to every cell of every text-typed column
pub fn repair_text_columns(table: &mut Table) -> (Vec<String>, usize) {
    let mut names = Vec::new();
    let mut changed = 0;

    for idx in table.text_columns() {
        let fixed = table.map_column(idx, repair_cell);
        debug!(column = %table.headers()[idx], fixed, "Repaired column");
        names.push(table.headers()[idx].clone());
        changed += fixed;
    }

    (names, changed)
}

/// Missing values become empty text, invisible characters and outer
/// whitespace are removed
pub fn normalize_column(table: &mut Table, idx: usize) {
    table.map_column(idx, |cell| Cell::Text(normalize_text(cell.as_field())));
    table.set_column_kind(idx, ColumnKind::Text);
}

/// Missing cells pass through; text falls back to itself when repair fails
pub fn repair_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Missing => Cell::Missing,
        Cell::Text(value) => Cell::Text(repair_mojibake(value).into_owned()),
    }
}

impl Default for CsvCleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}
