use std::path::PathBuf;

use thiserror::Error;

/// Failure conditions of the reporting pipeline.
///
/// None of these is fatal to the overall system: `SourceNotFound` is
/// recoverable through the demo dataset, `EmptyFilterResult` halts rendering
/// with a notice, and `MissingMetricColumn` degrades a single derived field.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("data source not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("no records match the active filters")]
    EmptyFilterResult,
    #[error("metric column not present in dataset: {0}")]
    MissingMetricColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
