//! Polars `AnyValue` conversion helpers shared across the pipeline.

use polars::prelude::AnyValue;

/// String form of a cell for display and export. Null becomes empty;
/// whole floats drop their fraction.
pub fn any_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(*v)),
        AnyValue::Float64(v) => format_numeric(*v),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float without a trailing ".0" for whole values.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Whole-number view of a cell; floats only qualify when their fraction
/// is zero (month columns read back as Float64 after inference).
pub fn any_to_i64(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(*v)),
        AnyValue::Int16(v) => Some(i64::from(*v)),
        AnyValue::Int32(v) => Some(i64::from(*v)),
        AnyValue::Int64(v) => Some(*v),
        AnyValue::UInt32(v) => Some(i64::from(*v)),
        AnyValue::UInt64(v) => i64::try_from(*v).ok(),
        AnyValue::Float32(v) => float_to_i64(f64::from(*v)),
        AnyValue::Float64(v) => float_to_i64(*v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(s),
        _ => None,
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        Some(value as i64)
    } else {
        None
    }
}

pub fn parse_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

pub fn parse_i64(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => parse_f64(trimmed).and_then(float_to_i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(format_numeric(150.0), "150");
        assert_eq!(format_numeric(2.5), "2.5");
    }

    #[test]
    fn numeric_coercion_covers_strings_and_floats() {
        assert_eq!(any_to_i64(&AnyValue::Float64(10.0)), Some(10));
        assert_eq!(any_to_i64(&AnyValue::Float64(10.5)), None);
        assert_eq!(parse_i64("2025"), Some(2025));
        assert_eq!(parse_i64("2025.0"), Some(2025));
        assert_eq!(parse_i64("Todos"), None);
    }
}
