//! Single table cell with one unified missing value

/// Tokens that timing exports use for "no value" besides an empty cell: the
/// dash placeholder and every NaN spelling spreadsheet tools write back out.
pub const MISSING_TOKENS: &[&str] = &[
    "-", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One cell of a results table.
///
/// Empty cells, the dash placeholder and the NaN family all become
/// [`Cell::Missing`] at ingestion, so downstream code only ever asks
/// [`Cell::is_missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Missing,
    Value(String),
}

impl Cell {
    /// Classify raw cell text.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || MISSING_TOKENS.contains(&raw) {
            Cell::Missing
        } else {
            Cell::Value(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Missing => None,
            Cell::Value(value) => Some(value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Value(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Value(value)
    }
}
