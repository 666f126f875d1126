use thiserror::Error;

use super::model::{cell_text, Dataset, Row};

// ---------------------------------------------------------------------------
// Query errors – the two user-visible outcomes that are not a table
// ---------------------------------------------------------------------------

/// Request-level query failures. The `Display` strings are exactly what the
/// page shows the user; both are served with HTTP 200.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The form field was absent, empty, or whitespace-only.
    #[error("Please enter a valid value.")]
    EmptyQuery,
    /// The scan ran and no row matched.
    #[error("No data found for the value '{0}'.")]
    NoMatches(String),
}

// ---------------------------------------------------------------------------
// Match predicate
// ---------------------------------------------------------------------------

/// True if any cell of the row, in its textual form, contains `query` as a
/// literal substring ignoring case. Missing cells compare as empty text.
pub fn row_matches(row: &Row, columns: &[String], query: &str) -> bool {
    matches_lowercase(row, columns, &query.to_lowercase())
}

fn matches_lowercase(row: &Row, columns: &[String], needle: &str) -> bool {
    columns
        .iter()
        .any(|col| cell_text(row, col).to_lowercase().contains(needle))
}

/// Indices of rows passing the match predicate, in original dataset order.
pub fn filtered_indices(dataset: &Dataset, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_lowercase(row, &dataset.column_names, &needle))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Validate the submitted form value and scan the dataset.
///
/// Validation trims; the scan and the no-match message use the value exactly
/// as submitted.
pub fn run_query(dataset: &Dataset, value: Option<&str>) -> Result<Vec<usize>, QueryError> {
    let query = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(QueryError::EmptyQuery),
    };

    let indices = filtered_indices(dataset, query);
    log::info!("query matched {} of {} rows", indices.len(), dataset.len());

    if indices.is_empty() {
        return Err(QueryError::NoMatches(query.to_string()));
    }
    Ok(indices)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
