//! Edge-list file reading.
//!
//! The input is delimited text, no headers, one edge per row: two vertex
//! ids and an optional weight. The reader only turns lines into numeric
//! rows; field-count and vertex-id validation is the graph builder's
//! contract. Blank lines are skipped; anything non-numeric fails with the
//! offending 1-based line number.

use std::path::Path;

use log::debug;

use lapcut_core::{Error, Result};

/// Read an edge file into raw numeric rows.
pub fn read_edge_rows(path: &Path, delimiter: u8) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| map_csv_error(0, e))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 1;
        let record = record.map_err(|e| map_csv_error(line, e))?;

        if record.len() == 1 && record.get(0).map(str::is_empty).unwrap_or(true) {
            continue;
        }

        let mut row = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value: f64 = field.parse().map_err(|_| Error::EdgeFormat {
                row: line,
                message: format!("field {field:?} is not numeric"),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    debug!("read {} edge rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn map_csv_error(line: usize, error: csv::Error) -> Error {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => Error::EdgeFormat { row: line, message },
    }
}
