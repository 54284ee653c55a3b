//! Full-summary CSV export.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use his_ingest::any_to_string;

/// Write the complete (non-truncated) summary as CSV, columns in frame
/// order. The writer is flushed and closed on every exit path.
pub fn write_summary_csv(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    let headers: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&headers).context("write header")?;

    let columns = frame.get_columns();
    for row in 0..frame.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| {
                let value = column.get(row).unwrap_or(AnyValue::Null);
                any_to_string(&value)
            })
            .collect();
        writer.write_record(&record).context("write row")?;
    }
    writer.flush().context("flush export")?;
    Ok(())
}
