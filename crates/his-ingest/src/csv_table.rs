//! Raw CSV table reading and header normalization.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use his_model::{ReportError, Result};

/// A raw tabular read: normalized headers plus string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Spreadsheet index artifacts exported without a name.
fn is_unnamed_column(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed")
}

/// Read a table from a CSV file.
///
/// Headers come from the first non-empty row and are whitespace-trimmed;
/// unnamed/index artifact columns are dropped together with their cells;
/// fully empty rows are skipped. A missing file is `SourceNotFound` so the
/// caller can decide the fallback policy. The file handle is scoped to this
/// function and released on every exit path.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    if !path.exists() {
        return Err(ReportError::SourceNotFound(path.to_path_buf()));
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| ReportError::Message(format!("read csv {}: {error}", path.display())))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| {
            ReportError::Message(format!("read record {}: {error}", path.display()))
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let raw_headers: Vec<String> = raw_rows[0].iter().map(|h| normalize_header(h)).collect();
    // Keep only named columns; remember their source positions so cells
    // stay aligned after the drop.
    let kept: Vec<(usize, String)> = raw_headers
        .into_iter()
        .enumerate()
        .filter(|(_, header)| !is_unnamed_column(header))
        .collect();
    let dropped = raw_rows[0].len() - kept.len();
    if dropped > 0 {
        debug!(dropped, path = %path.display(), "dropped unnamed columns");
    }

    let headers: Vec<String> = kept.iter().map(|(_, header)| header.clone()).collect();
    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let row: Vec<String> = kept
            .iter()
            .map(|(idx, _)| record.get(*idx).cloned().unwrap_or_default())
            .collect();
        rows.push(row);
    }
    debug!(rows = rows.len(), columns = headers.len(), path = %path.display(), "csv table read");
    Ok(CsvTable { headers, rows })
}
