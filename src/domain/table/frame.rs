// ============================================================
// TABLE
// ============================================================
// Headers plus row-major cells, loaded wholesale into memory

use super::{Cell, ColumnKind};
use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    kinds: Vec<ColumnKind>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, padding short rows with `Missing` and inferring
    /// each column's kind. Rows longer than the header are kept whole;
    /// readers reject them before they get here
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        for row in rows.iter_mut().filter(|row| row.len() < width) {
            row.resize(width, Cell::Missing);
        }

        let kinds = (0..width)
            .map(|idx| ColumnKind::infer(rows.iter().map(|row| &row[idx])))
            .collect();

        Self {
            headers,
            kinds,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_kind(&self, idx: usize) -> Option<ColumnKind> {
        self.kinds.get(idx).copied()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Look up a column that must exist
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Indices of every text-typed column
    pub fn text_columns(&self) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_text())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Replace every cell of one column in place; returns how many changed
    pub fn map_column<F>(&mut self, idx: usize, mut f: F) -> usize
    where
        F: FnMut(&Cell) -> Cell,
    {
        let mut changed = 0;
        for row in self.rows.iter_mut() {
            if let Some(cell) = row.get_mut(idx) {
                let next = f(cell);
                if next != *cell {
                    *cell = next;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Mark a column as text after it has been coerced
    pub fn set_column_kind(&mut self, idx: usize, kind: ColumnKind) {
        if let Some(slot) = self.kinds.get_mut(idx) {
            *slot = kind;
        }
    }
}
