use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// Textual form of the close-approach date, matching the source file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// CellValue – a single cell in a dataset column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
///
/// `Null` marks a missing cell: an empty field in the source file, or a
/// close-approach date that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            // Missing cells render as empty text, both in the table and
            // for substring matching.
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the dataset
// ---------------------------------------------------------------------------

/// One record: column name → cell value.
pub type Row = BTreeMap<String, CellValue>;

/// Textual form of one cell. A column absent from the row counts as missing
/// and becomes the empty string.
pub fn cell_text(row: &Row, column: &str) -> String {
    row.get(column).map(ToString::to_string).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in source-file order.
    pub rows: Vec<Row>,
    /// Column names exactly as they appear in the source header.
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_renders_in_source_format() {
        let d = CellValue::Date(NaiveDate::from_ymd_opt(1995, 1, 8).unwrap());
        assert_eq!(d.to_string(), "1995-01-08");
    }

    #[test]
    fn null_renders_as_empty_text() {
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn absent_column_counts_as_missing() {
        let row = Row::new();
        assert_eq!(cell_text(&row, "Name"), "");
    }

    #[test]
    fn scalar_textual_forms() {
        assert_eq!(CellValue::Integer(3703080).to_string(), "3703080");
        assert_eq!(CellValue::Float(6.1158).to_string(), "6.1158");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::String("2015 AB".into()).to_string(), "2015 AB");
    }
}
