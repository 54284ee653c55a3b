//! Aggregation engine: per-professional summary with reconciled totals.

use anyhow::{Context, Result};
use polars::prelude::{
    DataFrame, DataType, Expr, IntoLazy, JoinArgs, JoinType, MaintainOrderJoin,
    SortMultipleOptions, col, lit,
};
use tracing::debug;

use his_model::{DatasetSchema, ReportError, columns, columns::display};

use crate::data_utils::column_sum;

/// Scratch column for the independent attentions recomputation.
const RECONCILED: &str = "__atenciones_recalc";

/// Which metric ranks the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMetric {
    /// The reconciled attentions total.
    Attentions,
    /// Row-wise day sum, used when no attentions column exists.
    DaySum,
}

impl SummaryMetric {
    /// Display column carrying the metric.
    pub fn column(self) -> &'static str {
        match self {
            SummaryMetric::Attentions => display::ATTENTIONS,
            SummaryMetric::DaySum => display::DAY_SUM,
        }
    }
}

/// The aggregated summary, sorted descending by its metric.
///
/// Recomputed fresh on every filter or parameter change; ordering is a
/// property of the frame, nothing is persisted.
#[derive(Debug, Clone)]
pub struct Summary {
    pub frame: DataFrame,
    pub metric: SummaryMetric,
    /// Day columns under their display names, in day order.
    pub day_display: Vec<String>,
}

impl Summary {
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// The first `n` rows of the sorted summary, verbatim. Callers clamp
    /// `n` to their own bounds; this is a pure prefix view.
    pub fn top(&self, n: usize) -> DataFrame {
        self.frame.head(Some(n))
    }

    /// Grand total of a display column over the full (non-truncated)
    /// summary. Absent columns degrade as `MissingMetricColumn`.
    pub fn column_total(&self, name: &str) -> his_model::Result<f64> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| ReportError::MissingMetricColumn(name.to_string()))?;
        Ok(column_sum(column))
    }
}

/// Aggregate filtered records into the summary.
///
/// Groups by the exact (establishment, profession, professional) tuple —
/// rows collapse only when all present key columns match. Day columns and
/// the present totals are summed per group; the attentions total is then
/// reconciled by an independent per-group sum (the source column does not
/// always aggregate correctly under the generic pass, see
/// [`reconcile_attentions`]). With no grouping columns at all, a single
/// grand-total row is produced.
pub fn aggregate(df: &DataFrame, schema: &DatasetSchema) -> Result<Summary> {
    if df.height() == 0 {
        return Err(ReportError::EmptyFilterResult.into());
    }
    let group_cols = schema.group_columns();
    let day_names = schema.day_names();

    let mut agg_exprs: Vec<Expr> = day_names.iter().map(|name| sum_expr(name)).collect();
    if let Some(served) = &schema.served_total {
        agg_exprs.push(sum_expr(served));
    }
    if let Some(attention) = &schema.attention_total {
        agg_exprs.push(sum_expr(attention));
    }

    let mut summary = if group_cols.is_empty() {
        df.clone()
            .lazy()
            .select(agg_exprs)
            .collect()
            .context("grand total aggregation")?
    } else {
        let group_exprs: Vec<Expr> = group_cols.iter().map(|name| col(*name)).collect();
        let grouped = df
            .clone()
            .lazy()
            .group_by_stable(group_exprs.clone())
            .agg(agg_exprs)
            .collect()
            .context("group aggregation")?;
        match &schema.attention_total {
            Some(attention) => reconcile_attentions(df, grouped, &group_exprs, attention)?,
            None => grouped,
        }
    };
    debug!(groups = summary.height(), "aggregation complete");

    rename_for_display(&mut summary, schema)?;

    let day_display: Vec<String> = schema
        .day_columns
        .iter()
        .map(|column| column.display_name())
        .collect();
    let metric = if schema.attention_total.is_some() {
        SummaryMetric::Attentions
    } else {
        SummaryMetric::DaySum
    };

    // TOTAL is content-derived from the day columns, independent of
    // whatever the attentions source column holds.
    let mut derived: Vec<Expr> = Vec::new();
    if schema.has_day_columns() {
        derived.push(day_sum_expr(&day_display).alias(display::TOTAL));
    }
    if metric == SummaryMetric::DaySum {
        derived.push(day_sum_expr(&day_display).alias(display::DAY_SUM));
    }
    if !derived.is_empty() {
        summary = summary
            .lazy()
            .with_columns(derived)
            .collect()
            .context("derive total columns")?;
    }

    let sorted = summary
        .sort(
            [metric.column()],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .context("sort summary")?;

    Ok(Summary {
        frame: sorted,
        metric,
        day_display,
    })
}

fn sum_expr(name: &str) -> Expr {
    col(name).cast(DataType::Float64).sum()
}

/// Row-wise sum over the day columns; zero when there are none.
fn day_sum_expr(day_display: &[String]) -> Expr {
    day_display
        .iter()
        .fold(lit(0.0f64), |acc, name| {
            acc + col(name.as_str()).cast(DataType::Float64)
        })
}

/// Overwrite the generically-aggregated attentions column with an
/// independent per-group sum over the raw rows.
///
/// The source exports sometimes carry the attentions total in a way that a
/// generic aggregation pass mishandles; recomputing from the raw rows and
/// merging over the group key guarantees the reported value equals the true
/// sum over exactly the rows in that group.
fn reconcile_attentions(
    raw: &DataFrame,
    grouped: DataFrame,
    group_exprs: &[Expr],
    attention: &str,
) -> Result<DataFrame> {
    let recomputed = raw
        .clone()
        .lazy()
        .group_by_stable(group_exprs.to_vec())
        .agg([col(attention)
            .cast(DataType::Float64)
            .sum()
            .alias(RECONCILED)])
        .collect()
        .context("recompute attentions per group")?;
    let merged = grouped
        .lazy()
        .join(
            recomputed.lazy(),
            group_exprs.to_vec(),
            group_exprs.to_vec(),
            JoinArgs {
                maintain_order: MaintainOrderJoin::Left,
                ..JoinArgs::new(JoinType::Left)
            },
        )
        .with_column(col(RECONCILED).alias(attention))
        .collect()
        .context("merge reconciled attentions")?;
    let merged = merged.drop(RECONCILED).context("drop scratch column")?;
    Ok(merged)
}

/// Rename raw columns to their presentation names and strip the day-column
/// block marker.
fn rename_for_display(summary: &mut DataFrame, schema: &DatasetSchema) -> Result<()> {
    let mut pairs: Vec<(String, String)> = vec![
        (columns::ESTABLISHMENT.into(), display::ESTABLISHMENT.into()),
        (columns::PROFESSION.into(), display::PROFESSION.into()),
        (columns::PROFESSIONAL.into(), display::PROFESSIONAL.into()),
    ];
    if let Some(served) = &schema.served_total {
        pairs.push((served.clone(), display::SERVED.into()));
    }
    if let Some(attention) = &schema.attention_total {
        pairs.push((attention.clone(), display::ATTENTIONS.into()));
    }
    for column in &schema.day_columns {
        let shown = column.display_name();
        if shown != column.name {
            pairs.push((column.name.clone(), shown));
        }
    }
    for (raw, shown) in pairs {
        if summary.column(&raw).is_ok() {
            summary
                .rename(&raw, shown.as_str().into())
                .with_context(|| format!("rename {raw}"))?;
        }
    }
    Ok(())
}
