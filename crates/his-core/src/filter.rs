//! Filter engine: five independent equality predicates over the dataset.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, DataType, Expr, IntoLazy, col, lit};
use tracing::{debug, warn};

use his_ingest::parse_i64;
use his_model::{DatasetSchema, FilterSet, ReportError, columns};

/// Apply the filter set and return the surviving rows.
///
/// Predicates compose as a logical AND; the "Todos" sentinel and predicates
/// whose column is absent are skipped. A non-numeric year selection is a
/// logged no-op rather than an error. Zero surviving rows fail with
/// [`ReportError::EmptyFilterResult`] so callers halt before aggregation
/// instead of rendering a misleading empty report.
pub fn apply_filters(
    df: &DataFrame,
    schema: &DatasetSchema,
    filters: &FilterSet,
) -> Result<DataFrame> {
    let mut lazy = df.clone().lazy();

    if let Some(raw) = filters.year.value() {
        if schema.has_year {
            match year_predicate(df, raw) {
                Some(predicate) => lazy = lazy.filter(predicate),
                None => warn!(value = raw, "non-numeric year filter ignored"),
            }
        }
    }
    for (value, column, present) in [
        (
            filters.month_name.value(),
            columns::MONTH_NAME,
            df.column(columns::MONTH_NAME).is_ok(),
        ),
        (
            filters.establishment.value(),
            columns::ESTABLISHMENT,
            schema.has_establishment,
        ),
        (
            filters.profession.value(),
            columns::PROFESSION,
            schema.has_profession,
        ),
        (
            filters.professional.value(),
            columns::PROFESSIONAL,
            schema.has_professional,
        ),
    ] {
        if let Some(value) = value {
            if present {
                lazy = lazy.filter(col(column).eq(lit(value.to_string())));
            }
        }
    }

    let filtered = lazy.collect().context("apply filters")?;
    debug!(
        input = df.height(),
        surviving = filtered.height(),
        "filters applied"
    );
    if filtered.height() == 0 {
        return Err(ReportError::EmptyFilterResult.into());
    }
    Ok(filtered)
}

/// Year equality after numeric coercion. Numeric year columns compare as
/// floats; a string-typed year column falls back to literal comparison.
/// Returns None when the selection itself is not numeric.
fn year_predicate(df: &DataFrame, raw: &str) -> Option<Expr> {
    let year = parse_i64(raw)?;
    let numeric = df
        .column(columns::YEAR)
        .map(|column| {
            matches!(
                column.dtype(),
                DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32
            )
        })
        .unwrap_or(false);
    if numeric {
        Some(col(columns::YEAR).eq(lit(year as f64)))
    } else {
        Some(col(columns::YEAR).eq(lit(raw.trim().to_string())))
    }
}
