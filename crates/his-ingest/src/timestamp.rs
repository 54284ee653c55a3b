//! Source-file modification timestamp in the report's time zone.

use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use his_model::months;

/// The reporting network operates on Peru time regardless of where the
/// report runs.
pub const REPORT_TIMEZONE: Tz = chrono_tz::America::Lima;

/// Last-modified time of the data source, converted to the report zone.
#[derive(Debug, Clone)]
pub struct SourceTimestamp {
    pub datetime: DateTime<Tz>,
    /// True when the source was absent and "now" was substituted.
    pub fallback: bool,
}

impl SourceTimestamp {
    /// The update line as shown in the report header:
    /// "5 de Octubre de 2025 - 14:30 Hrs."
    pub fn formatted(&self) -> String {
        let date = self.datetime.date_naive();
        let month = months::month_name(i64::from(chrono::Datelike::month(&date)));
        let line = format!(
            "{} de {} de {} - {} Hrs.",
            chrono::Datelike::day(&date),
            month,
            chrono::Datelike::year(&date),
            self.datetime.format("%H:%M"),
        );
        if self.fallback {
            format!("{line} (Archivo no encontrado)")
        } else {
            line
        }
    }
}

/// Read the source's mtime and convert it to `tz`. When the source is
/// absent (or its mtime is unreadable) the current time is substituted and
/// flagged, so the header still renders.
pub fn source_timestamp(path: &Path, tz: Tz) -> SourceTimestamp {
    let modified = std::fs::metadata(path).and_then(|meta| meta.modified());
    match modified {
        Ok(system_time) => SourceTimestamp {
            datetime: DateTime::<Utc>::from(system_time).with_timezone(&tz),
            fallback: false,
        },
        Err(error) => {
            warn!(path = %path.display(), %error, "source mtime unavailable, using current time");
            SourceTimestamp {
                datetime: Utc::now().with_timezone(&tz),
                fallback: true,
            }
        }
    }
}
