use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Row, DATE_FORMAT};

/// Column coerced to a date at load time. Cells that fail to parse become
/// missing instead of aborting the load.
pub const DATE_COLUMN: &str = "Close Approach Date";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited text with a header row (the NASA export format)
/// * `.json` – records-oriented array of objects, the default
///   `df.to_json(orient='records')` shape
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per row. Every cell
/// is type-guessed except the [`DATE_COLUMN`], which is coerced to a date.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut row = Row::new();
        for (col_name, value) in headers.iter().zip(record.iter()) {
            let cell = if col_name == DATE_COLUMN {
                coerce_date(value)
            } else {
                guess_cell_type(value)
            };
            row.insert(col_name.clone(), cell);
        }
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

/// Parse a raw date cell. Empty or unparseable values become missing.
fn coerce_date(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(d) => CellValue::Date(d),
        Err(_) => CellValue::Null,
    }
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") {
        return CellValue::Bool(s.eq_ignore_ascii_case("true"));
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Neo Reference ID": 3703080,
///     "Name": "2015 AB",
///     "Close Approach Date": "1995-01-08"
///   },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance across the records.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !column_names.iter().any(|c| c == key) {
                column_names.push(key.clone());
            }
            let cell = if key == DATE_COLUMN {
                match val {
                    JsonValue::String(s) => coerce_date(s),
                    _ => CellValue::Null,
                }
            } else {
                json_to_cell(val)
            };
            row.insert(key.clone(), cell);
        }
        rows.push(row);
    }

    Ok(Dataset::new(column_names, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Neo Reference ID,Name,Absolute Magnitude,Close Approach Date,Hazardous
3703080,2015 AB,21.6,1995-01-08,true
3723955,2015 TB145,19.7,2015-10-31,false
2446862,2010 XC15,,not-a-date,false
";

    fn write_fixture(ext: &str, contents: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn csv_preserves_row_and_column_order() {
        let path = write_fixture("csv", SAMPLE_CSV);
        let ds = load_file(&path).unwrap();

        assert_eq!(
            ds.column_names,
            vec![
                "Neo Reference ID",
                "Name",
                "Absolute Magnitude",
                "Close Approach Date",
                "Hazardous"
            ]
        );
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.rows[0].get("Neo Reference ID"),
            Some(&CellValue::Integer(3703080))
        );
        assert_eq!(
            ds.rows[1].get("Name"),
            Some(&CellValue::String("2015 TB145".into()))
        );
    }

    #[test]
    fn close_approach_date_is_coerced() {
        let path = write_fixture("csv", SAMPLE_CSV);
        let ds = load_file(&path).unwrap();

        let expected = NaiveDate::from_ymd_opt(1995, 1, 8).unwrap();
        assert_eq!(
            ds.rows[0].get(DATE_COLUMN),
            Some(&CellValue::Date(expected))
        );
    }

    #[test]
    fn unparseable_date_becomes_missing() {
        let path = write_fixture("csv", SAMPLE_CSV);
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.rows[2].get(DATE_COLUMN), Some(&CellValue::Null));
    }

    #[test]
    fn empty_cell_becomes_missing() {
        let path = write_fixture("csv", SAMPLE_CSV);
        let ds = load_file(&path).unwrap();

        assert_eq!(
            ds.rows[2].get("Absolute Magnitude"),
            Some(&CellValue::Null)
        );
    }

    #[test]
    fn cell_types_are_guessed() {
        assert_eq!(guess_cell_type("42"), CellValue::Integer(42));
        assert_eq!(guess_cell_type("21.6"), CellValue::Float(21.6));
        assert_eq!(guess_cell_type("True"), CellValue::Bool(true));
        assert_eq!(
            guess_cell_type("2015 AB"),
            CellValue::String("2015 AB".into())
        );
        assert_eq!(guess_cell_type(""), CellValue::Null);
    }

    #[test]
    fn json_records_load() {
        let path = write_fixture(
            "json",
            r#"[
                {"Neo Reference ID": 3703080, "Name": "2015 AB", "Close Approach Date": "1995-01-08"},
                {"Neo Reference ID": 3723955, "Name": "2015 TB145", "Close Approach Date": "oops"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 2);
        let expected = NaiveDate::from_ymd_opt(1995, 1, 8).unwrap();
        assert_eq!(
            ds.rows[0].get(DATE_COLUMN),
            Some(&CellValue::Date(expected))
        );
        assert_eq!(ds.rows[1].get(DATE_COLUMN), Some(&CellValue::Null));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let path = write_fixture("parquet", "");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_file(Path::new("does-not-exist.csv")).is_err());
    }
}
