//! Command execution: load, filter, aggregate, reduce.

use anyhow::{Context, Result};
use tracing::{info, warn};

use his_core::{aggregate, apply_filters, daily_totals};
use his_ingest::{
    REPORT_TIMEZONE, dataset_from_frame, derive_month_name, load, sample_frame, source_timestamp,
};
use his_model::{FilterSet, FilterValue, ReportError};

use crate::cli::{ReportArgs, SchemaArgs};
use crate::export::write_summary_csv;
use crate::types::ReportResult;

/// Lower bound of the ranking cutoff, matching the slider minimum.
pub const TOP_N_MIN: usize = 5;
/// Default cutoff before clamping to the available professionals.
pub const TOP_N_DEFAULT: usize = 20;

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let (dataset, used_demo_data) = match load(&args.source) {
        Ok(dataset) => (dataset, false),
        Err(ReportError::SourceNotFound(path)) => {
            warn!(path = %path.display(), rows = args.demo_rows, "source missing, using demo dataset");
            let mut frame = sample_frame(args.demo_rows)?;
            derive_month_name(&mut frame)?;
            (dataset_from_frame(frame), true)
        }
        Err(error) => return Err(error.into()),
    };
    let updated = source_timestamp(&args.source, REPORT_TIMEZONE).formatted();
    info!(
        rows = dataset.frame.height(),
        day_columns = dataset.schema.day_columns.len(),
        "dataset loaded"
    );

    let filters = FilterSet {
        year: FilterValue::from_selection(&args.year),
        month_name: FilterValue::from_selection(&args.month),
        establishment: FilterValue::from_selection(&args.establishment),
        profession: FilterValue::from_selection(&args.profession),
        professional: FilterValue::from_selection(&args.professional),
    };
    let filtered = apply_filters(&dataset.frame, &dataset.schema, &filters)?;

    let summary = aggregate(&filtered, &dataset.schema)?;
    let trend = daily_totals(&filtered, &dataset.schema);
    let top_n = clamp_top_n(args.top, summary.height());

    let exported = match &args.export {
        Some(path) => {
            write_summary_csv(&summary.frame, path)
                .with_context(|| format!("export summary to {}", path.display()))?;
            info!(path = %path.display(), rows = summary.height(), "summary exported");
            Some(path.clone())
        }
        None => None,
    };

    Ok(ReportResult {
        source: args.source.clone(),
        updated,
        used_demo_data,
        schema: dataset.schema,
        summary,
        trend,
        top_n,
        with_days: args.with_days,
        exported,
    })
}

pub fn run_schema(args: &SchemaArgs) -> Result<ReportResult> {
    // Schema display reuses the report path with no filters so it reflects
    // exactly what a report run would see.
    let dataset = load(&args.source)?;
    let updated = source_timestamp(&args.source, REPORT_TIMEZONE).formatted();
    let summary = aggregate(&dataset.frame, &dataset.schema)?;
    let trend = daily_totals(&dataset.frame, &dataset.schema);
    let top_n = clamp_top_n(None, summary.height());
    Ok(ReportResult {
        source: args.source.clone(),
        updated,
        used_demo_data: false,
        schema: dataset.schema,
        summary,
        trend,
        top_n,
        with_days: false,
        exported: None,
    })
}

/// Clamp the requested cutoff to `[TOP_N_MIN, available]`; `top` itself
/// assumes a valid `n`, so the clamp lives here with the caller.
pub fn clamp_top_n(requested: Option<usize>, available: usize) -> usize {
    let requested = requested.unwrap_or_else(|| TOP_N_DEFAULT.min(available));
    requested.max(TOP_N_MIN).min(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_clamps_to_bounds() {
        assert_eq!(clamp_top_n(Some(2), 100), 5);
        assert_eq!(clamp_top_n(Some(50), 30), 30);
        assert_eq!(clamp_top_n(Some(12), 30), 12);
        assert_eq!(clamp_top_n(None, 100), 20);
        assert_eq!(clamp_top_n(None, 8), 8);
        assert_eq!(clamp_top_n(Some(10), 3), 3);
    }
}
