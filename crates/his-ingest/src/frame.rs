//! DataFrame construction from raw CSV tables.

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use his_model::{ReportError, Result, columns, months};

use crate::csv_table::CsvTable;
use crate::polars_utils::{any_to_i64, parse_f64};

/// Build a typed frame from a raw table.
///
/// Per-column inference: when every non-empty cell parses as a number the
/// column becomes `Float64` (empty cells become null), otherwise it stays a
/// string column. Day and total columns come out numeric this way without
/// any per-column configuration.
pub fn build_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let cells: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect();
        let numeric = cells.iter().any(|cell| !cell.is_empty())
            && cells
                .iter()
                .all(|cell| cell.is_empty() || parse_f64(cell).is_some());
        let series = if numeric {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| parse_f64(cell)).collect();
            Series::new(header.as_str().into(), values)
        } else {
            let values: Vec<String> = cells.iter().map(|cell| (*cell).to_string()).collect();
            Series::new(header.as_str().into(), values)
        };
        frame_columns.push(series.into());
    }
    DataFrame::new(frame_columns)
        .map_err(|error| ReportError::Message(format!("build frame: {error}")))
}

/// Add the derived Spanish month-name column from the numeric month column.
///
/// Rows whose month value does not map to 1..=12 get the unknown-month
/// category. When the table has no month column this is a no-op; month-based
/// features simply stay unavailable.
pub fn derive_month_name(df: &mut DataFrame) -> Result<()> {
    let Ok(month) = df.column(columns::MONTH) else {
        debug!("no month column; skipping month-name derivation");
        return Ok(());
    };
    let mut names: Vec<&'static str> = Vec::with_capacity(df.height());
    for idx in 0..month.len() {
        let value = month.get(idx).unwrap_or(AnyValue::Null);
        let name = match any_to_i64(&value) {
            Some(number) => months::month_name(number),
            None => months::UNKNOWN_MONTH,
        };
        names.push(name);
    }
    let series = Series::new(columns::MONTH_NAME.into(), names);
    df.with_column(series)
        .map_err(|error| ReportError::Message(format!("derive month name: {error}")))?;
    Ok(())
}
