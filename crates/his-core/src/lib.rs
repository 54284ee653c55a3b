pub mod aggregate;
pub mod data_utils;
pub mod filter;
pub mod trend;

pub use aggregate::{Summary, SummaryMetric, aggregate};
pub use data_utils::column_sum;
pub use filter::apply_filters;
pub use trend::{DailyTrendPoint, daily_totals};
