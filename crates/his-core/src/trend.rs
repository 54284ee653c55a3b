//! Daily trend reducer: dataset-wide totals per day of month.

use polars::prelude::DataFrame;

use his_model::DatasetSchema;

use crate::data_utils::column_sum;

/// Total of the metric for one day across every surviving record.
/// No identity beyond the day number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTrendPoint {
    pub day: u8,
    pub total: f64,
}

/// Reduce the filtered (ungrouped) frame to one point per day column.
///
/// Grouping keys are ignored: this is the dataset-wide daily total, not a
/// per-professional series. Day tokens that fail integer coercion never
/// reach this point — schema detection already discarded them. Returns an
/// empty series when the schema has no day columns, which downstream treats
/// as "no daily view available".
pub fn daily_totals(df: &DataFrame, schema: &DatasetSchema) -> Vec<DailyTrendPoint> {
    let mut points: Vec<DailyTrendPoint> = schema
        .day_columns
        .iter()
        .filter_map(|day_column| {
            let column = df.column(&day_column.name).ok()?;
            Some(DailyTrendPoint {
                day: day_column.day,
                total: column_sum(column),
            })
        })
        .collect();
    points.sort_by_key(|point| point.day);
    points
}
