pub mod columns;
pub mod error;
pub mod filter;
pub mod months;
pub mod schema;

pub use error::{ReportError, Result};
pub use filter::{ALL, FilterSet, FilterValue};
pub use months::{MONTH_NAMES, UNKNOWN_MONTH, month_name, month_order};
pub use schema::{
    DAY_SUFFIX, DatasetSchema, DayColumn, DayConvention, detect_day_columns, parse_day_token,
    strip_day_suffix,
};
