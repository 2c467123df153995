// ============================================================
// CELL VALUE
// ============================================================
// A single value in the table: either missing or text

/// Field tokens a tabular reader treats as "no value"
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// No value (empty field or an NA token)
    Missing,

    /// Raw text as decoded from the input
    Text(String),
}

impl Cell {
    /// Build a cell from a raw field, mapping NA tokens to `Missing`
    pub fn from_field(raw: &str) -> Self {
        if NA_TOKENS.contains(&raw) {
            Cell::Missing
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            Cell::Missing => None,
        }
    }

    /// Value as written to an output file (missing becomes empty)
    pub fn as_field(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    /// Check if the value is an integer literal
    pub fn is_integer(&self) -> bool {
        self.as_text()
            .map(|v| v.trim().parse::<i64>().is_ok())
            .unwrap_or(false)
    }

    /// Check if the value is a float literal (integers included)
    pub fn is_float(&self) -> bool {
        self.as_text()
            .map(|v| v.trim().parse::<f64>().is_ok())
            .unwrap_or(false)
    }

    /// Check if the value is a boolean literal
    pub fn is_boolean(&self) -> bool {
        matches!(
            self.as_text().map(str::trim),
            Some("True" | "TRUE" | "true" | "False" | "FALSE" | "false")
        )
    }
}
