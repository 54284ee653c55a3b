pub mod csv_table;
pub mod frame;
pub mod loader;
pub mod polars_utils;
pub mod sample;
pub mod timestamp;

pub use csv_table::{CsvTable, read_csv_table};
pub use frame::{build_frame, derive_month_name};
pub use loader::{Dataset, LoadCache, dataset_from_frame, load};
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, format_numeric, parse_f64, parse_i64,
};
pub use sample::{DEFAULT_SAMPLE_ROWS, sample_frame};
pub use timestamp::{REPORT_TIMEZONE, SourceTimestamp, source_timestamp};
