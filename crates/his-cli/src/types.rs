//! Result types passed from command execution to rendering.

use std::path::PathBuf;

use his_core::{DailyTrendPoint, Summary};
use his_model::DatasetSchema;

/// Everything the presenter needs to render one report run.
#[derive(Debug)]
pub struct ReportResult {
    pub source: PathBuf,
    /// Last-updated line in the report time zone.
    pub updated: String,
    /// True when the source was missing and the demo dataset was used.
    pub used_demo_data: bool,
    pub schema: DatasetSchema,
    /// Full sorted summary (export and headline totals read this).
    pub summary: Summary,
    /// Dataset-wide daily totals over the filtered rows.
    pub trend: Vec<DailyTrendPoint>,
    /// Effective ranking cutoff after clamping.
    pub top_n: usize,
    pub with_days: bool,
    pub exported: Option<PathBuf>,
}
