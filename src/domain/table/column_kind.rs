// ============================================================
// COLUMN KIND
// ============================================================
// Decides whether a column holds text or something else

use super::Cell;

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// At least one value is free text; the only kind that gets repaired
    Text,

    Integer,

    Float,

    Boolean,

    /// Every value is missing
    Empty,
}

impl ColumnKind {
    /// Infer the kind from every cell in a column
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let present: Vec<&Cell> = cells.into_iter().filter(|c| !c.is_missing()).collect();

        if present.is_empty() {
            ColumnKind::Empty
        } else if present.iter().all(|c| c.is_integer()) {
            ColumnKind::Integer
        } else if present.iter().all(|c| c.is_float()) {
            ColumnKind::Float
        } else if present.iter().all(|c| c.is_boolean()) {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ColumnKind::Text)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Boolean => write!(f, "boolean"),
            ColumnKind::Empty => write!(f, "empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::from_field(v)).collect()
    }

    #[test]
    fn test_infer_numeric_columns() {
        assert_eq!(ColumnKind::infer(&cells(&["1", "2", ""])), ColumnKind::Integer);
        assert_eq!(ColumnKind::infer(&cells(&["1", "2.5"])), ColumnKind::Float);
        assert_eq!(ColumnKind::infer(&cells(&["True", "false"])), ColumnKind::Boolean);
    }

    #[test]
    fn test_infer_text_and_empty() {
        assert_eq!(ColumnKind::infer(&cells(&["1", "abc"])), ColumnKind::Text);
        assert_eq!(ColumnKind::infer(&cells(&["", "NaN"])), ColumnKind::Empty);
        assert!(ColumnKind::infer(&cells(&["Ã©tÃ©"])).is_text());
    }
}
