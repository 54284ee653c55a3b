//! Dataset schema detection.
//!
//! The source exports shift column names between variants (two day-column
//! naming conventions, two possible attentions columns). Instead of pattern
//! matching on strings throughout the pipeline, the schema is detected once
//! at load time and everything downstream consumes the typed result.

use serde::{Deserialize, Serialize};

use crate::columns;

/// Naming convention of the per-day metric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayConvention {
    /// Bare day numbers: "1" .. "31".
    Bare,
    /// Day numbers carrying a second-block marker: "1.1" .. "31.1".
    Suffixed,
}

/// Marker distinguishing the second data block in suffixed exports.
pub const DAY_SUFFIX: &str = ".1";

/// One detected day-of-month column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    /// Raw column name as it appears in the table ("7" or "7.1").
    pub name: String,
    /// Parsed day of month, 1..=31.
    pub day: u8,
}

impl DayColumn {
    /// Name to show in presentation output: the bare day number.
    pub fn display_name(&self) -> String {
        strip_day_suffix(&self.name)
    }
}

/// Typed description of which semantic columns a loaded table carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Day columns ordered by day number ascending. May be empty, in which
    /// case no daily view is available (not an error).
    pub day_columns: Vec<DayColumn>,
    /// Convention the day columns follow; meaningless when there are none.
    pub convention: DayConvention,
    /// Resolved raw name of the attentions total, when present.
    pub attention_total: Option<String>,
    /// Resolved raw name of the served total, when present.
    pub served_total: Option<String>,
    pub has_year: bool,
    pub has_month: bool,
    pub has_establishment: bool,
    pub has_profession: bool,
    pub has_professional: bool,
}

impl DatasetSchema {
    /// Detect the schema from a table's column names.
    ///
    /// The day convention is chosen by match count; a suffixed block wins
    /// ties because bare numeric columns also show up as row artifacts in
    /// suffixed exports.
    pub fn detect<S: AsRef<str>>(names: &[S]) -> Self {
        let bare = detect_day_columns(names, DayConvention::Bare);
        let suffixed = detect_day_columns(names, DayConvention::Suffixed);
        let (day_columns, convention) = if suffixed.len() >= bare.len() && !suffixed.is_empty() {
            (suffixed, DayConvention::Suffixed)
        } else {
            (bare, DayConvention::Bare)
        };
        let has = |target: &str| names.iter().any(|name| name.as_ref() == target);
        let attention_total = columns::ATTENTION_TOTAL_CANDIDATES
            .iter()
            .find(|candidate| has(candidate))
            .map(|candidate| (*candidate).to_string());
        DatasetSchema {
            day_columns,
            convention,
            attention_total,
            served_total: has(columns::SERVED_TOTAL).then(|| columns::SERVED_TOTAL.to_string()),
            has_year: has(columns::YEAR),
            has_month: has(columns::MONTH),
            has_establishment: has(columns::ESTABLISHMENT),
            has_profession: has(columns::PROFESSION),
            has_professional: has(columns::PROFESSIONAL),
        }
    }

    /// Grouping key columns present in the table, coarsest first.
    pub fn group_columns(&self) -> Vec<&'static str> {
        let mut group = Vec::new();
        if self.has_establishment {
            group.push(columns::ESTABLISHMENT);
        }
        if self.has_profession {
            group.push(columns::PROFESSION);
        }
        if self.has_professional {
            group.push(columns::PROFESSIONAL);
        }
        group
    }

    /// Raw day column names in day order.
    pub fn day_names(&self) -> Vec<&str> {
        self.day_columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_day_columns(&self) -> bool {
        !self.day_columns.is_empty()
    }
}

/// Parse a bare day token, accepting an optional single leading zero for
/// days 1-9 (the exports write both "7" and "07"). Rejects "0", "32" and
/// anything non-numeric.
pub fn parse_day_token(token: &str) -> Option<u8> {
    match token.as_bytes() {
        &[d @ b'1'..=b'9'] => Some(d - b'0'),
        &[b'0', d @ b'1'..=b'9'] => Some(d - b'0'),
        &[t @ b'1'..=b'2', d @ b'0'..=b'9'] => Some((t - b'0') * 10 + (d - b'0')),
        &[b'3', d @ b'0'..=b'1'] => Some(30 + (d - b'0')),
        _ => None,
    }
}

/// Parse a day token under a specific convention.
fn parse_day_name(name: &str, convention: DayConvention) -> Option<u8> {
    match convention {
        DayConvention::Bare => parse_day_token(name),
        DayConvention::Suffixed => parse_day_token(name.strip_suffix(DAY_SUFFIX)?),
    }
}

/// Select every column name that is a day column under the given convention,
/// ordered by numeric day ascending ("2" before "10", never string order).
pub fn detect_day_columns<S: AsRef<str>>(names: &[S], convention: DayConvention) -> Vec<DayColumn> {
    let mut matched: Vec<DayColumn> = names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            parse_day_name(name, convention).map(|day| DayColumn {
                name: name.to_string(),
                day,
            })
        })
        .collect();
    matched.sort_by_key(|column| column.day);
    matched
}

/// Strip the second-block marker from a suffixed day name for display.
/// Non-day and bare names pass through unchanged.
pub fn strip_day_suffix(name: &str) -> String {
    match name.strip_suffix(DAY_SUFFIX) {
        Some(bare) if parse_day_token(bare).is_some() => bare.to_string(),
        _ => name.to_string(),
    }
}
