//! Column-level numeric helpers.

use polars::prelude::{AnyValue, Column};

use his_ingest::any_to_f64;

/// Sum a column's values as f64, skipping nulls and non-numeric cells.
pub fn column_sum(column: &Column) -> f64 {
    (0..column.len())
        .filter_map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            any_to_f64(&value)
        })
        .sum()
}
